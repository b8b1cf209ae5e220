//! Config File Tests
//!
//! `fixtura.toml` loaded from disk drives the runner.

use crate::common::*;
use fixtura::{Error, SetupFailurePolicy};

#[test]
fn config_from_file_drives_runner() {
    let (_dir, path) = config_file("fail_fast = true\nfilter = \"keep\"\n");
    let config = RunnerConfig::from_file(&path).unwrap();

    let fixture = Fixture::builder("configured")
        .test("keep_bad", |_| assert_true(false, "bad"))
        .test("drop", |_| Ok(()))
        .test("keep_good", |_| Ok(()))
        .build()
        .unwrap();

    let (report, _) = run_with(config, &fixture);
    assert_eq!(labels(&report), vec!["FAILED", "skipped", "skipped"]);
    assert_eq!(
        report.tests[1].outcome,
        TestOutcome::Skipped {
            reason: SkipReason::Filtered
        }
    );
    assert_eq!(
        report.tests[2].outcome,
        TestOutcome::Skipped {
            reason: SkipReason::FailFast
        }
    );
}

#[test]
fn skip_current_policy_from_file() {
    let (_dir, path) = config_file("setup_failure = \"skip_current\"\n");
    let config = RunnerConfig::from_file(&path).unwrap();
    assert_eq!(
        config.setup_failure_policy().unwrap(),
        SetupFailurePolicy::SkipCurrent
    );
}

#[test]
fn invalid_policy_in_file_rejected() {
    let (_dir, path) = config_file("setup_failure = \"sometimes\"\n");
    let err = RunnerConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn malformed_toml_rejected() {
    let (_dir, path) = config_file("fail_fast = maybe\n");
    assert!(RunnerConfig::from_file(&path).is_err());
}

#[test]
fn catch_panics_disabled_propagates_panic() {
    let config = RunnerConfig {
        catch_panics: false,
        ..RunnerConfig::default()
    };
    let fixture = Fixture::builder("unwinds")
        .test("panics", |_| panic!("escapes the runner"))
        .build()
        .unwrap();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run_with(config, &fixture)
    }));
    assert!(result.is_err());
}
