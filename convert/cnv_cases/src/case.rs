//! Declared case identifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A declared, argument-less test case.
///
/// Every converter suite declares the same cases; only some are defined for
/// a given library. Declaration order is run order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CaseId {
    /// Which types qualify as converters.
    IsConverter,
    /// Free-form experiments.
    Scratchpad,
    /// Overload selection on converter signatures.
    Sfinae,
    /// Converters that transform text, e.g. encrypt on the way out.
    Encryption,
    /// Closures and function pointers used as converters.
    Callables,
    /// Fallback values and fallback functions on failure.
    Fallbacks,
    /// Lexical-cast style converter.
    LcastConverter,
    /// Stream based converter.
    StreamConverter,
    /// printf-family converter.
    PrintfConverter,
    /// strtol-family converter.
    StrtolConverter,
    /// Parser-combinator converter.
    SpiritConverter,
    /// Integer to string across converters.
    IntToString,
    /// User-defined types: [`Change`](cnv_values::Change),
    /// [`Direction`](cnv_values::Direction), [`SmallStr`](cnv_values::SmallStr).
    UserType,
}

impl CaseId {
    /// Number of declared cases.
    pub const COUNT: usize = 13;

    /// All cases, in declaration order.
    pub const ALL: [CaseId; Self::COUNT] = [
        CaseId::IsConverter,
        CaseId::Scratchpad,
        CaseId::Sfinae,
        CaseId::Encryption,
        CaseId::Callables,
        CaseId::Fallbacks,
        CaseId::LcastConverter,
        CaseId::StreamConverter,
        CaseId::PrintfConverter,
        CaseId::StrtolConverter,
        CaseId::SpiritConverter,
        CaseId::IntToString,
        CaseId::UserType,
    ];

    /// Snake-case case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CaseId::IsConverter => "is_converter",
            CaseId::Scratchpad => "scratchpad",
            CaseId::Sfinae => "sfinae",
            CaseId::Encryption => "encryption",
            CaseId::Callables => "callables",
            CaseId::Fallbacks => "fallbacks",
            CaseId::LcastConverter => "lcast_converter",
            CaseId::StreamConverter => "stream_converter",
            CaseId::PrintfConverter => "printf_converter",
            CaseId::StrtolConverter => "strtol_converter",
            CaseId::SpiritConverter => "spirit_converter",
            CaseId::IntToString => "int_to_string",
            CaseId::UserType => "user_type",
        }
    }

    /// Position in [`CaseId::ALL`].
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// No declared case has this name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no case named '{0}'")]
pub struct UnknownCase(pub String);

impl FromStr for CaseId {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| UnknownCase(s.to_owned()))
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
