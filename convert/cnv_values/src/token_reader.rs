//! Whitespace-delimited token input with a sticky failure flag.
//!
//! Mirrors formatted stream extraction: each read consumes one token, a
//! token that does not parse puts the reader into a failed state, and while
//! failed every further read is a no-op until [`TokenReader::clear`].
//!
//! Tokens are separated by C-locale whitespace only: space, `\t`, `\n`,
//! `\v`, `\f` and `\r`. Any other character, including Unicode spaces,
//! belongs to the token.
//!
//! Unlike stream extraction, a failed [`TokenReader::read`] never touches
//! its target. Callers can rely on the prior value surviving.

use std::fmt;
use std::str::FromStr;

use crate::ReadError;

/// Reads whitespace-delimited tokens from borrowed text.
#[derive(Clone, Debug)]
pub struct TokenReader<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> TokenReader<'a> {
    pub fn new(input: &'a str) -> Self {
        TokenReader {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Consume the next token.
    ///
    /// Returns `None` when the input is used up or the reader has failed.
    pub fn next_token(&mut self) -> Option<&'a str> {
        if self.failed {
            return None;
        }

        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start_matches(is_separator);
        if trimmed.is_empty() {
            self.pos = self.input.len();
            return None;
        }

        let start = self.pos + (rest.len() - trimmed.len());
        let end = trimmed
            .find(is_separator)
            .map_or(self.input.len(), |offset| start + offset);
        self.pos = end;
        Some(&self.input[start..end])
    }

    /// Consume one token and parse it into `target`.
    ///
    /// On failure the reader is marked failed and `target` keeps its value.
    pub fn read<T>(&mut self, target: &mut T) -> &mut Self
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        if let Ok(value) = self.parse::<T>() {
            *target = value;
        }
        self
    }

    /// Consume one token and parse it as `T`.
    pub fn parse<T>(&mut self) -> Result<T, ReadError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        if self.failed {
            return Err(ReadError::Failed);
        }

        let Some(token) = self.next_token() else {
            self.failed = true;
            return Err(ReadError::Exhausted);
        };

        token.parse::<T>().map_err(|err| {
            self.failed = true;
            tracing::debug!(token, %err, "token rejected");
            ReadError::Invalid {
                token: token.to_owned(),
                message: err.to_string(),
            }
        })
    }

    /// Whether a read has failed since construction or the last [`clear`](Self::clear).
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Whether only whitespace remains.
    pub fn is_exhausted(&self) -> bool {
        self.remaining().trim_start_matches(is_separator).is_empty()
    }

    /// Reset the failure flag. Consumed tokens stay consumed.
    pub fn clear(&mut self) {
        self.failed = false;
    }

    /// Unconsumed input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

/// C-locale `isspace`. `char::is_ascii_whitespace` omits vertical tab.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

#[cfg(test)]
mod tests;
