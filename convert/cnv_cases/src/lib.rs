//! Named conversion test cases.
//!
//! A converter test suite declares the same fixed set of cases for every
//! library under test. This crate owns that set and runs whichever cases
//! have been given a body:
//!
//! - [`CaseId`]: the declared cases, in a fixed order
//! - [`Registry`]: which declared cases have a body
//! - [`CaseRunner`]: runs defined cases, reports undefined ones
//! - [`str_to_int`] / [`int_to_str`]: round-trip checks generic over any
//!   [`Converter`]
//! - [`IS_MSVC`] / [`IS_GNU`]: build toolchain, for cases whose expected
//!   output differs between C runtimes
//!
//! # Usage
//!
//! ```
//! use cnv_cases::{CaseId, CaseRunner, Registry};
//!
//! let registry = Registry::with_builtin();
//! let summary = CaseRunner::new().run(&registry);
//! assert_eq!(summary.passed, 1);
//! assert!(!registry.is_defined(CaseId::Encryption));
//! ```

mod builtin;
mod case;
mod checks;
mod converter;
mod failure;
mod registry;
mod result;
mod runner;
mod toolchain;

use std::sync::Once;

pub use case::{CaseId, UnknownCase};
pub use checks::{
    int_to_str, str_to_int, CheckFailure, INT_TO_STR, STR_TO_INT_INVALID, STR_TO_INT_VALID,
};
pub use converter::Converter;
pub use failure::{ensure, CaseFailure, CaseResult};
pub use registry::{CaseFn, Registry};
pub use result::{CaseOutcome, CaseReport, RunSummary};
pub use runner::{CaseRunner, RunnerConfig, FAIL_FAST_VAR, FILTER_VAR};
pub use toolchain::{Toolchain, IS_GNU, IS_MSVC};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=cnv_cases=debug`
/// (case progress) or `RUST_LOG=cnv_values=debug` (rejected tokens).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
