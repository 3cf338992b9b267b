//! Case result types.

use std::fmt;
use std::time::Duration;

use crate::{CaseFailure, CaseId};

/// Outcome of a single case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Body ran and returned `Ok`.
    Passed,
    /// Body ran and returned a failure.
    Failed(CaseFailure),
    /// Case is declared but has no body.
    Undefined,
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CaseOutcome::Failed(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, CaseOutcome::Undefined)
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseOutcome::Passed => f.write_str("ok"),
            CaseOutcome::Failed(failure) => write!(f, "FAILED: {failure}"),
            CaseOutcome::Undefined => f.write_str("undefined"),
        }
    }
}

/// Result of running (or not running) a single case.
#[derive(Clone, Debug)]
pub struct CaseReport {
    pub id: CaseId,
    pub outcome: CaseOutcome,
    /// Zero for undefined cases.
    pub duration: Duration,
}

impl CaseReport {
    pub fn passed(id: CaseId, duration: Duration) -> Self {
        CaseReport {
            id,
            outcome: CaseOutcome::Passed,
            duration,
        }
    }

    #[cold]
    pub fn failed(id: CaseId, failure: CaseFailure, duration: Duration) -> Self {
        CaseReport {
            id,
            outcome: CaseOutcome::Failed(failure),
            duration,
        }
    }

    pub fn undefined(id: CaseId) -> Self {
        CaseReport {
            id,
            outcome: CaseOutcome::Undefined,
            duration: Duration::ZERO,
        }
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ... {}", self.id, self.outcome)
    }
}

/// Summary of one registry run.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Reports in run order.
    pub reports: Vec<CaseReport>,
    pub passed: usize,
    pub failed: usize,
    pub undefined: usize,
    /// Wall time for the whole run.
    pub duration: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        RunSummary::default()
    }

    pub fn add(&mut self, report: CaseReport) {
        match &report.outcome {
            CaseOutcome::Passed => self.passed += 1,
            CaseOutcome::Failed(_) => self.failed += 1,
            CaseOutcome::Undefined => self.undefined += 1,
        }
        self.reports.push(report);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.undefined
    }

    /// Cases whose body actually ran.
    pub fn executed(&self) -> usize {
        self.passed + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Failed reports, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.reports.iter().filter(|r| r.outcome.is_failed())
    }

    /// Get exit code: 0 = all pass, 1 = failures, 2 = no case ran.
    pub fn exit_code(&self) -> i32 {
        if self.executed() == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}
