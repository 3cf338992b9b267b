//! Integer/string round-trip checks, generic over the converter.
//!
//! Each check walks a fixed table and stops at the first input whose
//! conversion disagrees with the table.

use thiserror::Error;

use crate::Converter;

/// Text that must convert to the paired `i32`.
pub const STR_TO_INT_VALID: &[(&str, i32)] = &[
    ("0", 0),
    ("123", 123),
    ("-123", -123),
    ("2147483647", i32::MAX),
    ("-2147483648", i32::MIN),
];

/// Text that must fail to convert to `i32`.
pub const STR_TO_INT_INVALID: &[&str] = &["", "abc", "12a", "2147483648"];

/// `i32` values and their canonical decimal text.
pub const INT_TO_STR: &[(i32, &str)] = &[
    (0, "0"),
    (123, "123"),
    (-123, "-123"),
    (i32::MAX, "2147483647"),
    (i32::MIN, "-2147483648"),
];

/// A conversion that disagreed with the expected table.
///
/// String inputs and outputs are rendered quoted, integers bare.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckFailure {
    /// Conversion failed where a value was expected.
    #[error("converting {input} failed, expected {expected}")]
    Rejected { input: String, expected: String },
    /// Conversion produced the wrong value.
    #[error("converting {input} produced {actual}, expected {expected}")]
    Mismatch {
        input: String,
        actual: String,
        expected: String,
    },
    /// Conversion succeeded where failure was expected.
    #[error("converting {input} should have failed, produced {actual}")]
    Accepted { input: String, actual: String },
}

impl CheckFailure {
    /// The offending input, as rendered in the message.
    pub fn input(&self) -> &str {
        match self {
            CheckFailure::Rejected { input, .. }
            | CheckFailure::Mismatch { input, .. }
            | CheckFailure::Accepted { input, .. } => input,
        }
    }
}

fn quoted(s: &str) -> String {
    format!("{s:?}")
}

/// Check a string-to-`i32` converter against the fixed tables.
pub fn str_to_int<C>(cnv: &C) -> Result<(), CheckFailure>
where
    C: for<'a> Converter<&'a str, i32> + ?Sized,
{
    for &(input, expected) in STR_TO_INT_VALID {
        match cnv.convert(input) {
            Some(actual) if actual == expected => {}
            Some(actual) => {
                return Err(CheckFailure::Mismatch {
                    input: quoted(input),
                    actual: actual.to_string(),
                    expected: expected.to_string(),
                })
            }
            None => {
                return Err(CheckFailure::Rejected {
                    input: quoted(input),
                    expected: expected.to_string(),
                })
            }
        }
    }

    for &input in STR_TO_INT_INVALID {
        if let Some(actual) = cnv.convert(input) {
            return Err(CheckFailure::Accepted {
                input: quoted(input),
                actual: actual.to_string(),
            });
        }
    }

    tracing::trace!("str_to_int passed");
    Ok(())
}

/// Check an `i32`-to-string converter against the fixed table.
pub fn int_to_str<C>(cnv: &C) -> Result<(), CheckFailure>
where
    C: Converter<i32, String> + ?Sized,
{
    for &(input, expected) in INT_TO_STR {
        match cnv.convert(input) {
            Some(actual) if actual == expected => {}
            Some(actual) => {
                return Err(CheckFailure::Mismatch {
                    input: input.to_string(),
                    actual: quoted(&actual),
                    expected: quoted(expected),
                })
            }
            None => {
                return Err(CheckFailure::Rejected {
                    input: input.to_string(),
                    expected: quoted(expected),
                })
            }
        }
    }

    tracing::trace!("int_to_str passed");
    Ok(())
}
