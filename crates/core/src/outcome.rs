//! Run results
//!
//! - [`HookRole`]: which lifecycle hook ran
//! - [`LifecycleEvent`]: one step the runner executed, in order
//! - [`TestOutcome`]: pass/fail/error/skip of one test
//! - [`TestReport`] and [`SuiteReport`]: what a run hands back to callers

use crate::assertion::TestFailure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a lifecycle hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookRole {
    /// Runs once before any test
    SuiteSetup,
    /// Runs before every test
    PerTestSetup,
}

impl fmt::Display for HookRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookRole::SuiteSetup => write!(f, "suite-setup"),
            HookRole::PerTestSetup => write!(f, "per-test-setup"),
        }
    }
}

/// A step executed (or skipped) by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// The suite-setup hook ran
    SuiteSetup,
    /// The per-test-setup hook ran for `test`
    PerTestSetup {
        /// Test the setup prepared
        test: String,
    },
    /// The body of `test` ran
    Test {
        /// Test name
        test: String,
    },
    /// `test` was not run
    Skipped {
        /// Test name
        test: String,
    },
}

/// Why a test errored instead of passing or failing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorReason {
    /// The body returned a non-assertion fault
    Fault {
        /// Fault message
        message: String,
    },
    /// The body panicked
    Panicked {
        /// Panic payload, if it was a string
        message: String,
    },
    /// A setup hook failed so the test could not run meaningfully
    SetupFailed {
        /// Hook that failed
        hook: HookRole,
        /// Failure message
        message: String,
    },
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorReason::Fault { message } => write!(f, "{}", message),
            ErrorReason::Panicked { message } => write!(f, "panicked: {}", message),
            ErrorReason::SetupFailed { hook, message } => {
                write!(f, "errored due to {} failure: {}", hook, message)
            }
        }
    }
}

/// Why a test was not run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Excluded by the name filter
    Filtered,
    /// An earlier test did not pass and fail-fast was on
    FailFast,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Filtered => write!(f, "filtered"),
            SkipReason::FailFast => write!(f, "fail-fast"),
        }
    }
}

/// Outcome of a single test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TestOutcome {
    /// Every assertion held
    Passed,
    /// An assertion did not hold
    Failed {
        /// First failing assertion
        failure: TestFailure,
    },
    /// The test could not complete
    Errored {
        /// What went wrong
        reason: ErrorReason,
    },
    /// The test was not run
    Skipped {
        /// Why it was skipped
        reason: SkipReason,
    },
}

impl TestOutcome {
    /// Check if the test passed
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    /// Check if the test failed an assertion
    pub fn is_failed(&self) -> bool {
        matches!(self, TestOutcome::Failed { .. })
    }

    /// Check if the test errored
    pub fn is_errored(&self) -> bool {
        matches!(self, TestOutcome::Errored { .. })
    }

    /// Check if the test was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, TestOutcome::Skipped { .. })
    }

    /// Short status label: `ok`, `FAILED`, `ERROR` or `skipped`
    pub fn label(&self) -> &'static str {
        match self {
            TestOutcome::Passed => "ok",
            TestOutcome::Failed { .. } => "FAILED",
            TestOutcome::Errored { .. } => "ERROR",
            TestOutcome::Skipped { .. } => "skipped",
        }
    }
}

/// Result of one test in a suite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestReport {
    /// Test name
    pub name: String,
    /// Outcome
    pub outcome: TestOutcome,
    /// Wall time of the test body in microseconds (0 when not run)
    pub duration_us: u64,
}

/// Result of running every test of one fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Fixture name
    pub fixture: String,
    /// Per-test results, in discovery order
    pub tests: Vec<TestReport>,
    /// Steps the runner executed, in order
    pub trace: Vec<LifecycleEvent>,
}

impl SuiteReport {
    /// Create an empty report for `fixture`
    pub fn new(fixture: impl Into<String>) -> Self {
        Self {
            fixture: fixture.into(),
            tests: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// Look up the report of a test by name
    pub fn test(&self, name: &str) -> Option<&TestReport> {
        self.tests.iter().find(|t| t.name == name)
    }

    /// Number of passed tests
    pub fn passed(&self) -> usize {
        self.count(TestOutcome::is_passed)
    }

    /// Number of failed tests
    pub fn failed(&self) -> usize {
        self.count(TestOutcome::is_failed)
    }

    /// Number of errored tests
    pub fn errored(&self) -> usize {
        self.count(TestOutcome::is_errored)
    }

    /// Number of skipped tests
    pub fn skipped(&self) -> usize {
        self.count(TestOutcome::is_skipped)
    }

    /// True when no test failed or errored
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.errored() == 0
    }

    fn count(&self, pred: fn(&TestOutcome) -> bool) -> usize {
        self.tests.iter().filter(|t| pred(&t.outcome)).count()
    }
}
