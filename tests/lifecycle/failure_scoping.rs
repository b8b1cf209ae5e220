//! Failure Scoping Tests
//!
//! A failing assertion, fault or panic is charged to one test; the suite keeps
//! going. Setup failures follow the configured policy.

use crate::common::*;
use fixtura::samples::set_second_to_x;

// ============================================================================
// Test body failures
// ============================================================================

#[test]
fn failed_assertion_does_not_stop_suite() {
    let fixture = Fixture::builder("scoped")
        .test("fails", |_| assert_equal("x", "a"))
        .test("passes", |_| Ok(()))
        .build()
        .unwrap();

    let (report, _) = run(&fixture);
    assert_eq!(labels(&report), vec!["FAILED", "ok"]);
    assert!(!report.is_success());
}

#[test]
fn first_failing_assertion_ends_the_test() {
    let fixture = Fixture::builder("first-failure")
        .test("two asserts", |s| {
            assert_equal(1, 2)?;
            s.set_suite("reached", true);
            assert_equal(3, 4)
        })
        .build()
        .unwrap();

    let (report, state) = run(&fixture);
    assert!(state.suite("reached").is_none());
    match &report.tests[0].outcome {
        TestOutcome::Failed {
            failure: TestFailure::Assertion {
                expected, actual, ..
            },
        } => {
            assert_eq!(expected, "1");
            assert_eq!(actual, "2");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn out_of_bounds_error_is_recorded_as_error() {
    let fixture = Fixture::builder("bounds")
        .per_test_setup(|s| {
            s.set_per_test("list", Value::string_list(["only"]));
            Ok(())
        })
        .test("too short", |s| {
            let list = s.string_list(Scope::PerTest, "list").unwrap_or_default();
            set_second_to_x(&list)?;
            Ok(())
        })
        .test("still runs", |_| Ok(()))
        .build()
        .unwrap();

    let (report, _) = run(&fixture);
    assert_eq!(
        report.tests[0].outcome,
        TestOutcome::Errored {
            reason: ErrorReason::Fault {
                message: "index 1 out of bounds for length 1".to_string()
            }
        }
    );
    assert!(report.tests[1].outcome.is_passed());
}

#[test]
fn panic_is_recorded_and_suite_continues() {
    let fixture = Fixture::builder("panics")
        .test("panics", |_| {
            let empty: Vec<String> = Vec::new();
            assert_equal("x", empty[0].as_str())
        })
        .test("after", |_| Ok(()))
        .build()
        .unwrap();

    let (report, _) = run(&fixture);
    assert!(matches!(
        report.tests[0].outcome,
        TestOutcome::Errored {
            reason: ErrorReason::Panicked { .. }
        }
    ));
    assert!(report.tests[1].outcome.is_passed());
}

// ============================================================================
// Setup failures
// ============================================================================

fn failing_per_test_setup() -> Fixture {
    Fixture::builder("broken-each")
        .suite_setup(|s| {
            s.set_suite("calls", 0i64);
            Ok(())
        })
        .per_test_setup(|s| {
            let n = s.suite("calls").and_then(Value::as_int).unwrap_or(0) + 1;
            s.set_suite("calls", n);
            if n >= 2 {
                return Err(TestFailure::fault("fixture resource unavailable"));
            }
            Ok(())
        })
        .test("first", |s| {
            journal(s, "first");
            Ok(())
        })
        .test("second", |s| {
            journal(s, "second");
            Ok(())
        })
        .test("third", |s| {
            journal(s, "third");
            Ok(())
        })
        .build()
        .unwrap()
}

#[test]
fn suite_setup_failure_errors_all_tests() {
    let fixture = Fixture::builder("broken-suite")
        .suite_setup(|_| assert_true(false, "suite resource"))
        .test("a", |s| {
            journal(s, "a");
            Ok(())
        })
        .test("b", |s| {
            journal(s, "b");
            Ok(())
        })
        .build()
        .unwrap();

    let (report, state) = run(&fixture);
    assert_eq!(labels(&report), vec!["ERROR", "ERROR"]);
    assert!(journal_entries(&state).is_empty());
    assert!(report.tests.iter().all(|t| matches!(
        &t.outcome,
        TestOutcome::Errored {
            reason: ErrorReason::SetupFailed {
                hook: HookRole::SuiteSetup,
                ..
            }
        }
    )));
}

#[test]
fn per_test_setup_failure_skips_remaining_by_default() {
    let (report, state) = run(&failing_per_test_setup());

    assert_eq!(labels(&report), vec!["ok", "ERROR", "ERROR"]);
    assert_eq!(journal_entries(&state), strings(&["first"]));
    // per-test-setup is not retried once the suite has halted
    assert_eq!(state.suite("calls"), Some(&Value::Int(2)));
}

#[test]
fn per_test_setup_failure_skip_current_policy() {
    let config = RunnerConfig {
        setup_failure: "skip_current".to_string(),
        ..RunnerConfig::default()
    };
    let (report, state) = run_with(config, &failing_per_test_setup());

    // every later setup also fails, so only the first test runs
    assert_eq!(labels(&report), vec!["ok", "ERROR", "ERROR"]);
    assert_eq!(journal_entries(&state), strings(&["first"]));
    assert_eq!(state.suite("calls"), Some(&Value::Int(3)));
}

#[test]
fn skip_current_discards_partial_setup_writes() {
    let config = RunnerConfig {
        setup_failure: "skip_current".to_string(),
        ..RunnerConfig::default()
    };
    let fixture = Fixture::builder("half-built")
        .per_test_setup(|s| {
            let n = s.suite("calls").and_then(Value::as_int).unwrap_or(0) + 1;
            s.set_suite("calls", n);
            if n == 1 {
                s.set_per_test("partial", "left by a failed setup");
                return Err(TestFailure::fault("setup gave up halfway"));
            }
            s.set_per_test("ready", true);
            Ok(())
        })
        .test("first", |_| Ok(()))
        .test("second", |s| {
            assert_true(s.per_test("partial").is_none(), "stale per-test field")?;
            assert_equal(Some(&Value::Bool(true)), s.per_test("ready"))
        })
        .build()
        .unwrap();

    let (report, state) = run_with(config, &fixture);
    assert_eq!(labels(&report), vec!["ERROR", "ok"]);
    assert!(state.per_test("partial").is_none());
    assert_eq!(state.per_test("ready"), Some(&Value::Bool(true)));
}

#[test]
fn fail_fast_skips_rest() {
    let config = RunnerConfig {
        fail_fast: true,
        ..RunnerConfig::default()
    };
    let fixture = Fixture::builder("fast")
        .test("bad", |_| assert_true(false, "bad"))
        .test("good", |_| Ok(()))
        .build()
        .unwrap();

    let (report, _) = run_with(config, &fixture);
    assert_eq!(labels(&report), vec!["FAILED", "skipped"]);
    assert_eq!(
        report.tests[1].outcome,
        TestOutcome::Skipped {
            reason: SkipReason::FailFast
        }
    );
}
