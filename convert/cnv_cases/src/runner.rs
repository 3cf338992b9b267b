//! Case execution.
//!
//! Runs defined cases from a [`Registry`] sequentially, in declaration
//! order. Panics in a case body are not caught: a broken precondition ends
//! the run.

use std::time::Instant;

use crate::{CaseId, CaseOutcome, CaseReport, Registry, RunSummary};

/// Environment variable holding a case-name filter.
pub const FILTER_VAR: &str = "CNV_CASES_FILTER";

/// Environment variable enabling fail-fast (`1`, `true`, `yes`, `on`).
pub const FAIL_FAST_VAR: &str = "CNV_CASES_FAIL_FAST";

/// Configuration for the case runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Only cases whose name contains this substring.
    pub filter: Option<String>,
    /// Stop after the first failed case.
    pub fail_fast: bool,
    /// Report declared cases that have no body.
    pub include_undefined: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            filter: None,
            fail_fast: false,
            include_undefined: true,
        }
    }
}

impl RunnerConfig {
    /// Defaults overridden by [`FILTER_VAR`] and [`FAIL_FAST_VAR`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the runner's
    /// variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = RunnerConfig::default();
        if let Some(filter) = lookup(FILTER_VAR).filter(|f| !f.is_empty()) {
            config.filter = Some(filter);
        }
        if let Some(flag) = lookup(FAIL_FAST_VAR) {
            config.fail_fast = parse_flag(&flag);
        }
        config
    }

    fn selects(&self, id: CaseId) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|filter| id.name().contains(filter))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Case runner.
#[derive(Clone, Debug, Default)]
pub struct CaseRunner {
    config: RunnerConfig,
}

impl CaseRunner {
    /// Create a runner with default config.
    pub fn new() -> Self {
        CaseRunner::default()
    }

    /// Create a runner with custom config.
    pub fn with_config(config: RunnerConfig) -> Self {
        CaseRunner { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every selected case of `registry`.
    pub fn run(&self, registry: &Registry) -> RunSummary {
        let mut summary = RunSummary::new();
        let start = Instant::now();

        for id in registry.declared().filter(|&id| self.config.selects(id)) {
            let Some(body) = registry.get(id) else {
                tracing::trace!(case = %id, "case declared but not defined");
                if self.config.include_undefined {
                    summary.add(CaseReport::undefined(id));
                }
                continue;
            };

            tracing::debug!(case = %id, "running case");
            let case_start = Instant::now();
            let report = match body() {
                Ok(()) => CaseReport::passed(id, case_start.elapsed()),
                Err(failure) => CaseReport::failed(id, failure, case_start.elapsed()),
            };
            tracing::debug!(case = %id, outcome = %report.outcome, "case finished");

            let failed = matches!(report.outcome, CaseOutcome::Failed(_));
            summary.add(report);
            if failed && self.config.fail_fast {
                tracing::debug!(case = %id, "fail-fast: stopping run");
                break;
            }
        }

        summary.duration = start.elapsed();
        summary
    }
}

#[cfg(test)]
mod tests;
