//! Why a case body failed.

use cnv_values::{CapacityError, ParseTokenError, ReadError};
use thiserror::Error;

use crate::CheckFailure;

/// Result of running a case body.
pub type CaseResult = Result<(), CaseFailure>;

/// A case body's failure.
///
/// Broken preconditions are not failures: they panic and abort the run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CaseFailure {
    /// A round-trip check disagreed with its table.
    #[error(transparent)]
    Check(#[from] CheckFailure),
    /// Reading from a token stream failed.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// A token did not parse.
    #[error(transparent)]
    Token(#[from] ParseTokenError),
    /// Text did not fit a small string.
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    /// An [`ensure`] condition did not hold.
    #[error("{0}")]
    Assertion(String),
}

/// Fail with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(CaseFailure::Assertion(message.into()))
    }
}
