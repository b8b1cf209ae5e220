//! Suite runner
//!
//! Drives one fixture through its lifecycle, strictly sequentially:
//!
//! 1. suite-setup, once
//! 2. for each test in discovery order:
//!    a. clear per-test fields, run per-test-setup
//!    b. run the test body
//!    c. record the outcome and continue with the next test
//!
//! Suite fields are never reset, so a mutation made by test N is visible to
//! test N+1. Per-test fields are cleared and rebuilt before every test.
//!
//! ## Failure scoping
//!
//! - A failing assertion, a returned fault or a panic in a test body is
//!   recorded against that test only.
//! - A failing suite-setup marks every test as errored; none of them run.
//! - A failing per-test-setup follows [`SetupFailurePolicy`].

use crate::config::{RunnerConfig, SetupFailurePolicy};
use crate::fixture::{Fixture, HookFn, TestCase};
use fixtura_core::{
    ErrorReason, FixtureState, HookRole, LifecycleEvent, Result, SkipReason, SuiteReport,
    TestFailure, TestOutcome, TestReport,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of calling a hook or a test body
enum Invocation {
    Completed,
    Failed(TestFailure),
    Panicked(String),
}

/// Why the runner stopped running tests
enum Halt {
    Setup(ErrorReason),
    FailFast,
}

/// Sequential runner for fixtures
#[derive(Debug, Clone)]
pub struct SuiteRunner {
    config: RunnerConfig,
    policy: SetupFailurePolicy,
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self {
            config: RunnerConfig::default(),
            policy: SetupFailurePolicy::default(),
        }
    }
}

impl SuiteRunner {
    /// Create a runner from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured setup failure policy is invalid.
    pub fn new(config: RunnerConfig) -> Result<Self> {
        let policy = config.setup_failure_policy()?;
        Ok(Self { config, policy })
    }

    /// Runner configuration
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run a fixture against fresh state
    pub fn run(&self, fixture: &Fixture) -> SuiteReport {
        let mut state = FixtureState::new();
        self.run_with_state(fixture, &mut state)
    }

    /// Run every fixture in order, each against fresh state
    pub fn run_all<'a, I>(&self, fixtures: I) -> Vec<SuiteReport>
    where
        I: IntoIterator<Item = &'a Fixture>,
    {
        fixtures.into_iter().map(|f| self.run(f)).collect()
    }

    /// Run a fixture against caller-provided state
    ///
    /// The state is left as the last hook or test wrote it, which lets
    /// callers inspect suite fields after the run.
    pub fn run_with_state(&self, fixture: &Fixture, state: &mut FixtureState) -> SuiteReport {
        let mut report = SuiteReport::new(fixture.name());
        let mut halted: Option<Halt> = None;

        info!(
            target: "fixtura::runner",
            fixture = fixture.name(),
            tests = fixture.tests().len(),
            "Suite started"
        );

        if let Some(hook) = fixture.hook(HookRole::SuiteSetup) {
            report.trace.push(LifecycleEvent::SuiteSetup);
            if let Err(message) = self.run_hook(hook, state) {
                warn!(
                    target: "fixtura::runner",
                    fixture = fixture.name(),
                    error = %message,
                    "Suite setup failed, no test will run"
                );
                halted = Some(Halt::Setup(ErrorReason::SetupFailed {
                    hook: HookRole::SuiteSetup,
                    message,
                }));
            }
        }

        for test in fixture.tests() {
            if !self.config.selects(test.name()) {
                skip(&mut report, test, SkipReason::Filtered);
                continue;
            }

            match &halted {
                Some(Halt::Setup(reason)) => {
                    report.trace.push(LifecycleEvent::Skipped {
                        test: test.name().to_string(),
                    });
                    record(
                        &mut report,
                        test,
                        TestOutcome::Errored {
                            reason: reason.clone(),
                        },
                        0,
                    );
                    continue;
                }
                Some(Halt::FailFast) => {
                    skip(&mut report, test, SkipReason::FailFast);
                    continue;
                }
                None => {}
            }

            state.reset_per_test();
            if let Some(hook) = fixture.hook(HookRole::PerTestSetup) {
                report.trace.push(LifecycleEvent::PerTestSetup {
                    test: test.name().to_string(),
                });
                if let Err(message) = self.run_hook(hook, state) {
                    warn!(
                        target: "fixtura::runner",
                        fixture = fixture.name(),
                        test = test.name(),
                        error = %message,
                        "Per-test setup failed"
                    );
                    let reason = ErrorReason::SetupFailed {
                        hook: HookRole::PerTestSetup,
                        message,
                    };
                    record(
                        &mut report,
                        test,
                        TestOutcome::Errored {
                            reason: reason.clone(),
                        },
                        0,
                    );
                    halted = match self.policy {
                        SetupFailurePolicy::SkipRemaining => Some(Halt::Setup(reason)),
                        SetupFailurePolicy::SkipCurrent if self.config.fail_fast => {
                            Some(Halt::FailFast)
                        }
                        SetupFailurePolicy::SkipCurrent => None,
                    };
                    continue;
                }
            }

            report.trace.push(LifecycleEvent::Test {
                test: test.name().to_string(),
            });
            let (outcome, duration_us) = self.run_test(test, state);
            match &outcome {
                TestOutcome::Passed => {
                    debug!(target: "fixtura::runner", test = test.name(), duration_us, "Test passed");
                }
                other => {
                    warn!(
                        target: "fixtura::runner",
                        fixture = fixture.name(),
                        test = test.name(),
                        status = other.label(),
                        "Test did not pass"
                    );
                    if self.config.fail_fast {
                        halted = Some(Halt::FailFast);
                    }
                }
            }
            record(&mut report, test, outcome, duration_us);
        }

        info!(
            target: "fixtura::runner",
            fixture = fixture.name(),
            passed = report.passed(),
            failed = report.failed(),
            errored = report.errored(),
            skipped = report.skipped(),
            "Suite finished"
        );
        report
    }

    fn run_hook(&self, hook: &HookFn, state: &mut FixtureState) -> std::result::Result<(), String> {
        match self.invoke(hook, state) {
            Invocation::Completed => Ok(()),
            Invocation::Failed(failure) => Err(failure.to_string()),
            Invocation::Panicked(message) => Err(format!("panicked: {}", message)),
        }
    }

    fn run_test(&self, test: &TestCase, state: &mut FixtureState) -> (TestOutcome, u64) {
        debug!(target: "fixtura::runner", test = test.name(), "Running test");
        let start = Instant::now();
        let invocation = self.invoke_with(|s| test.run(s), state);
        let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        let outcome = match invocation {
            Invocation::Completed => TestOutcome::Passed,
            Invocation::Failed(failure) if failure.is_assertion() => {
                TestOutcome::Failed { failure }
            }
            Invocation::Failed(failure) => TestOutcome::Errored {
                reason: ErrorReason::Fault {
                    message: failure.to_string(),
                },
            },
            Invocation::Panicked(message) => TestOutcome::Errored {
                reason: ErrorReason::Panicked { message },
            },
        };
        (outcome, duration_us)
    }

    fn invoke(&self, hook: &HookFn, state: &mut FixtureState) -> Invocation {
        self.invoke_with(|s| hook(s), state)
    }

    fn invoke_with<F>(&self, f: F, state: &mut FixtureState) -> Invocation
    where
        F: FnOnce(&mut FixtureState) -> fixtura_core::TestResult,
    {
        let result = if self.config.catch_panics {
            match panic::catch_unwind(AssertUnwindSafe(|| f(state))) {
                Ok(result) => result,
                Err(payload) => return Invocation::Panicked(panic_message(payload.as_ref())),
            }
        } else {
            f(state)
        };

        match result {
            Ok(()) => Invocation::Completed,
            Err(failure) => Invocation::Failed(failure),
        }
    }
}

fn skip(report: &mut SuiteReport, test: &TestCase, reason: SkipReason) {
    debug!(target: "fixtura::runner", test = test.name(), %reason, "Test skipped");
    report.trace.push(LifecycleEvent::Skipped {
        test: test.name().to_string(),
    });
    record(report, test, TestOutcome::Skipped { reason }, 0);
}

fn record(report: &mut SuiteReport, test: &TestCase, outcome: TestOutcome, duration_us: u64) {
    report.tests.push(TestReport {
        name: test.name().to_string(),
        outcome,
        duration_us,
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
