//! Tri-state change flag.

use std::fmt;
use std::str::FromStr;

use crate::ParseTokenError;

/// Whether a quantity went up, went down, or stayed put.
///
/// Defaults to [`Change::Unchanged`]. Text form is one of three two-letter
/// tokens: `no`, `up`, `dn`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Change {
    /// `no`
    #[default]
    Unchanged,
    /// `up`
    Up,
    /// `dn`
    Down,
}

impl Change {
    /// All states, in declaration order.
    pub const ALL: [Change; 3] = [Change::Unchanged, Change::Up, Change::Down];

    /// Accepted tokens, in the same order as [`Change::ALL`].
    pub const TOKENS: &'static [&'static str] = &["no", "up", "dn"];

    /// The token this state formats as.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Change::Unchanged => "no",
            Change::Up => "up",
            Change::Down => "dn",
        }
    }

    /// Look up a state by its exact token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Change::Up),
            "dn" => Some(Change::Down),
            "no" => Some(Change::Unchanged),
            _ => None,
        }
    }
}

impl FromStr for Change {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Change::from_token(s).ok_or_else(|| ParseTokenError::new("change", s, Change::TOKENS))
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
