//! Default-value extension point.
//!
//! Converters need a value to start from before parsing into it. Most types
//! provide one through `Default`; types that intentionally don't (such as
//! [`Direction`](crate::Direction)) implement [`MakeDefault`] directly.
//!
//! A type with neither is rejected at compile time:
//!
//! ```compile_fail
//! struct NoDefault;
//! let _ = cnv_values::make_default::<NoDefault>();
//! ```
//!
//! and `Direction` itself still has no `Default`:
//!
//! ```compile_fail
//! let _: cnv_values::Direction = Default::default();
//! ```

/// Produces a conventional starting value for `Self`.
pub trait MakeDefault: Sized {
    /// The starting value.
    fn make_default() -> Self;
}

impl<T: Default> MakeDefault for T {
    #[inline]
    fn make_default() -> Self {
        T::default()
    }
}

/// Shorthand for `T::make_default()`.
#[inline]
pub fn make_default<T: MakeDefault>() -> T {
    T::make_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Change, Direction, SmallStr};

    #[test]
    fn test_types_with_default_delegate() {
        assert_eq!(make_default::<Change>(), Change::Unchanged);
        assert_eq!(make_default::<i32>(), 0);
        assert_eq!(make_default::<String>(), "");
        assert!(make_default::<SmallStr>().is_empty());
    }

    #[test]
    fn test_direction_default_is_up() {
        assert_eq!(make_default::<Direction>(), Direction::Up);
        assert_eq!(Direction::make_default(), Direction::Up);
    }

    #[test]
    fn test_generic_fallback() {
        fn parse_or_default<T: MakeDefault + std::str::FromStr>(s: &str) -> T {
            s.parse().unwrap_or_else(|_| T::make_default())
        }

        assert_eq!(parse_or_default::<Direction>("dn"), Direction::Down);
        assert_eq!(parse_or_default::<Direction>("sideways"), Direction::Up);
        assert_eq!(parse_or_default::<Change>("sideways"), Change::Unchanged);
    }
}
