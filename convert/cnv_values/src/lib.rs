//! Value types for exercising string/value conversion.
//!
//! These types carry no conversion logic of their own beyond a fixed set of
//! text tokens. They exist so converter test suites have user-defined types
//! with known, deliberately different contracts to convert to and from:
//!
//! - [`Change`]: tri-state flag with a default (`no` / `up` / `dn`)
//! - [`Direction`]: two-state flag *without* a default (`up` / `dn`)
//! - [`SmallStr`]: fixed-capacity inline string, `Copy`, no heap
//! - [`MakeDefault`]: default-value extension point for types like
//!   [`Direction`] that have no `Default`
//! - [`TokenReader`]: whitespace-delimited token stream with a sticky
//!   failure flag, the way formatted extraction behaves
//!
//! # Usage
//!
//! ```
//! use cnv_values::{Change, Direction, TokenReader, make_default};
//!
//! let mut change = Change::default();
//! let mut reader = TokenReader::new("up");
//! reader.read(&mut change);
//! assert!(!reader.is_failed());
//! assert_eq!(change.to_string(), "up");
//!
//! assert_eq!(make_default::<Direction>(), Direction::Up);
//! ```

mod change;
mod direction;
mod error;
mod make_default;
mod small_str;
mod token_reader;

pub use change::Change;
pub use direction::Direction;
pub use error::{CapacityError, ParseTokenError, ReadError};
pub use make_default::{make_default, MakeDefault};
pub use small_str::{SmallStr, CAPACITY, MAX_LEN};
pub use token_reader::TokenReader;
