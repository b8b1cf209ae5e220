//! Ordering Tests
//!
//! suite-setup runs once before everything; per-test-setup runs right before
//! each test; tests run in registration order.

use crate::common::*;

fn journaled_fixture(tests: &[&'static str]) -> Fixture {
    let mut builder = Fixture::builder("journaled")
        .suite_setup(|s| {
            journal(s, "suite-setup");
            Ok(())
        })
        .per_test_setup(|s| {
            journal(s, "per-test-setup");
            Ok(())
        });
    for name in tests {
        let name: &'static str = name;
        builder = builder.test(name, move |s| {
            journal(s, name);
            Ok(())
        });
    }
    builder.build().unwrap()
}

// ============================================================================
// Hook ordering
// ============================================================================

#[test]
fn suite_setup_runs_exactly_once_before_everything() {
    let (report, state) = run(&journaled_fixture(&["t1", "t2", "t3"]));

    let entries = journal_entries(&state);
    assert_eq!(entries.iter().filter(|e| *e == "suite-setup").count(), 1);
    assert_eq!(entries[0], "suite-setup");
    assert_eq!(report.trace[0], LifecycleEvent::SuiteSetup);
}

#[test]
fn per_test_setup_precedes_every_test() {
    let (_, state) = run(&journaled_fixture(&["t1", "t2", "t3"]));

    assert_eq!(
        journal_entries(&state),
        strings(&[
            "suite-setup",
            "per-test-setup",
            "t1",
            "per-test-setup",
            "t2",
            "per-test-setup",
            "t3",
        ])
    );
}

#[test]
fn tests_run_in_registration_order_not_alphabetical() {
    let (report, state) = run(&journaled_fixture(&["zulu", "alpha", "mike"]));

    let ran: Vec<String> = journal_entries(&state)
        .into_iter()
        .filter(|e| !e.ends_with("setup"))
        .collect();
    assert_eq!(ran, strings(&["zulu", "alpha", "mike"]));

    let reported: Vec<&str> = report.tests.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(reported, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn trace_matches_execution() {
    let (report, _) = run(&journaled_fixture(&["a", "b"]));

    assert_eq!(
        report.trace,
        vec![
            LifecycleEvent::SuiteSetup,
            LifecycleEvent::PerTestSetup {
                test: "a".to_string()
            },
            LifecycleEvent::Test {
                test: "a".to_string()
            },
            LifecycleEvent::PerTestSetup {
                test: "b".to_string()
            },
            LifecycleEvent::Test {
                test: "b".to_string()
            },
        ]
    );
}

#[test]
fn repeated_runs_are_deterministic() {
    let fixture = journaled_fixture(&["one", "two", "three"]);
    let (first, first_state) = run(&fixture);
    let (second, second_state) = run(&fixture);

    assert_eq!(first.trace, second.trace);
    assert_eq!(journal_entries(&first_state), journal_entries(&second_state));
}

// ============================================================================
// Missing hooks
// ============================================================================

#[test]
fn fixture_without_hooks_runs_tests_only() {
    let fixture = Fixture::builder("bare")
        .test("only", |s| {
            journal(s, "only");
            Ok(())
        })
        .build()
        .unwrap();

    let (report, state) = run(&fixture);
    assert!(report.is_success());
    assert_eq!(journal_entries(&state), strings(&["only"]));
    assert_eq!(
        report.trace,
        vec![LifecycleEvent::Test {
            test: "only".to_string()
        }]
    );
}
