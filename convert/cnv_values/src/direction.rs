//! Two-state direction flag with no default.

use std::fmt;
use std::str::FromStr;

use crate::{MakeDefault, ParseTokenError};

/// Up or down.
///
/// There is deliberately no `Default` implementation: a `Direction` always
/// names one of its two states. Generic code that needs a placeholder value
/// goes through [`MakeDefault`], which yields [`Direction::Up`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `up`
    Up,
    /// `dn`
    Down,
}

impl Direction {
    /// Accepted tokens.
    pub const TOKENS: &'static [&'static str] = &["up", "dn"];

    /// The token this state formats as.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "dn",
        }
    }

    /// Look up a state by its exact token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Direction::Up),
            "dn" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl MakeDefault for Direction {
    fn make_default() -> Self {
        Direction::Up
    }
}

impl FromStr for Direction {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_token(s)
            .ok_or_else(|| ParseTokenError::new("direction", s, Direction::TOKENS))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
