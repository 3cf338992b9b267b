//! Error types for token parsing and capacity checks.

use thiserror::Error;

use crate::small_str::MAX_LEN;

/// A token that is not one of a type's fixed spellings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized {kind} token '{token}', expected one of: {}", .expected.join(", "))]
pub struct ParseTokenError {
    /// Name of the type being parsed (e.g. `"change"`).
    pub kind: &'static str,
    /// The rejected input.
    pub token: String,
    /// Every token the type accepts.
    pub expected: &'static [&'static str],
}

impl ParseTokenError {
    #[cold]
    pub(crate) fn new(kind: &'static str, token: &str, expected: &'static [&'static str]) -> Self {
        ParseTokenError {
            kind,
            token: token.to_owned(),
            expected,
        }
    }
}

/// Text too long for a [`SmallStr`](crate::SmallStr).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("text of {len} bytes does not fit in a small string (at most {max} bytes)", max = MAX_LEN)]
pub struct CapacityError {
    /// Length of the rejected text in bytes.
    pub len: usize,
}

/// Failure reading a value from a [`TokenReader`](crate::TokenReader).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadError {
    /// An earlier read failed and the failure has not been cleared.
    #[error("reader is in a failed state")]
    Failed,
    /// No token left in the input.
    #[error("no token left to read")]
    Exhausted,
    /// The token did not parse as the requested type.
    #[error("cannot read '{token}': {message}")]
    Invalid {
        /// The consumed token.
        token: String,
        /// The parse error, rendered.
        message: String,
    },
}
