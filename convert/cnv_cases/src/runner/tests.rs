use pretty_assertions::assert_eq;

use super::*;
use crate::{ensure, CaseResult};

fn passing() -> CaseResult {
    Ok(())
}

fn failing() -> CaseResult {
    ensure(false, "always fails")
}

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

fn ids(summary: &RunSummary) -> Vec<CaseId> {
    summary.reports.iter().map(|r| r.id).collect()
}

#[test]
fn default_config() {
    let config = RunnerConfig::default();
    assert_eq!(config.filter, None);
    assert!(!config.fail_fast);
    assert!(config.include_undefined);
}

#[test]
fn config_from_lookup() {
    let config = RunnerConfig::from_lookup(lookup(&[
        (FILTER_VAR, "converter"),
        (FAIL_FAST_VAR, "TRUE"),
    ]));
    assert_eq!(config.filter.as_deref(), Some("converter"));
    assert!(config.fail_fast);
}

#[test]
fn empty_filter_and_unknown_flag_are_ignored() {
    let config = RunnerConfig::from_lookup(lookup(&[(FILTER_VAR, ""), (FAIL_FAST_VAR, "maybe")]));
    assert_eq!(config, RunnerConfig::default());
}

#[test]
fn reports_every_declared_case() {
    let summary = CaseRunner::new().run(&Registry::with_builtin());
    assert_eq!(summary.total(), CaseId::COUNT);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.undefined, CaseId::COUNT - 1);
    assert_eq!(ids(&summary), CaseId::ALL);
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn undefined_cases_can_be_omitted() {
    let runner = CaseRunner::with_config(RunnerConfig {
        include_undefined: false,
        ..RunnerConfig::default()
    });
    let summary = runner.run(&Registry::with_builtin());
    assert_eq!(ids(&summary), [CaseId::UserType]);
}

#[test]
fn nothing_defined_exits_with_two() {
    let summary = CaseRunner::new().run(&Registry::new());
    assert_eq!(summary.executed(), 0);
    assert_eq!(summary.exit_code(), 2);
}

#[test]
fn filter_is_substring_match() {
    let mut registry = Registry::new();
    registry.define(CaseId::StrtolConverter, passing);
    registry.define(CaseId::PrintfConverter, passing);
    registry.define(CaseId::Callables, passing);

    let runner = CaseRunner::with_config(RunnerConfig {
        filter: Some("converter".to_owned()),
        include_undefined: false,
        ..RunnerConfig::default()
    });
    let summary = runner.run(&registry);
    assert_eq!(
        ids(&summary),
        [CaseId::PrintfConverter, CaseId::StrtolConverter]
    );
}

#[test]
fn failures_do_not_stop_the_run_by_default() {
    let mut registry = Registry::new();
    registry.define(CaseId::IsConverter, failing);
    registry.define(CaseId::Fallbacks, passing);

    let summary = CaseRunner::new().run(&registry);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn fail_fast_stops_after_first_failure() {
    let mut registry = Registry::new();
    registry.define(CaseId::IsConverter, failing);
    registry.define(CaseId::Fallbacks, passing);

    let runner = CaseRunner::with_config(RunnerConfig {
        fail_fast: true,
        include_undefined: false,
        ..RunnerConfig::default()
    });
    let summary = runner.run(&registry);
    assert_eq!(ids(&summary), [CaseId::IsConverter]);
    assert!(summary.has_failures());
}

#[test]
fn config_accessor() {
    let config = RunnerConfig {
        fail_fast: true,
        ..RunnerConfig::default()
    };
    assert_eq!(CaseRunner::with_config(config.clone()).config(), &config);
}
