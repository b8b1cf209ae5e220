//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

pub use fixtura::{
    assert_equal, assert_true, ErrorReason, Fixture, FixtureState, HookRole, LifecycleEvent,
    RunnerConfig, Scope, SkipReason, SuiteReport, SuiteRunner, TestFailure, TestOutcome,
    TestResult, Value,
};
use tempfile::TempDir;

// ============================================================================
// Journal - ordered record of hook and test invocations
// ============================================================================

/// Suite field the journal helpers append to.
pub const JOURNAL: &str = "journal";

/// Append an entry to the suite-level journal.
pub fn journal(state: &mut FixtureState, entry: &str) {
    let mut entries = journal_entries(state);
    entries.push(entry.to_string());
    state.set_suite(JOURNAL, entries);
}

/// Read the journal (empty if nothing was written).
pub fn journal_entries(state: &FixtureState) -> Vec<String> {
    state.string_list(Scope::Suite, JOURNAL).unwrap_or_default()
}

// ============================================================================
// Runner helpers
// ============================================================================

/// Run with default config, returning the report and the final state.
pub fn run(fixture: &Fixture) -> (SuiteReport, FixtureState) {
    run_with(RunnerConfig::default(), fixture)
}

/// Run with the given config, returning the report and the final state.
pub fn run_with(config: RunnerConfig, fixture: &Fixture) -> (SuiteReport, FixtureState) {
    let runner = SuiteRunner::new(config).expect("valid runner config");
    let mut state = FixtureState::new();
    let report = runner.run_with_state(fixture, &mut state);
    (report, state)
}

/// Owned strings from literals.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Status labels of every test, in report order.
pub fn labels(report: &SuiteReport) -> Vec<&'static str> {
    report.tests.iter().map(|t| t.outcome.label()).collect()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn config_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(fixtura::CONFIG_FILE_NAME);
    std::fs::write(&path, content).expect("Failed to write config file");
    (dir, path)
}
