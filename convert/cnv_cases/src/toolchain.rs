//! Build toolchain detection.
//!
//! Resolved at compile time from `target_env`. MSVC is the only ABI with a
//! distinct C runtime worth telling apart; every other target (GNU, MinGW,
//! Cygwin, musl, Apple) counts as GNU-compatible.

/// Built for the MSVC ABI.
pub const IS_MSVC: bool = cfg!(target_env = "msvc");

/// Built for a GNU-compatible ABI.
pub const IS_GNU: bool = !IS_MSVC;

/// Toolchain family the crate was built with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Toolchain {
    Msvc,
    Gnu,
}

impl Toolchain {
    /// The toolchain of this build.
    #[must_use]
    pub const fn current() -> Self {
        if IS_MSVC {
            Toolchain::Msvc
        } else {
            Toolchain::Gnu
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Toolchain::Msvc => "msvc",
            Toolchain::Gnu => "gnu",
        }
    }
}

impl std::fmt::Display for Toolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
