//! Assertion primitives for test bodies
//!
//! Hooks and tests return [`TestResult`]. An assertion that does not hold
//! returns `Err(TestFailure::Assertion { .. })`; propagating it with `?` ends
//! the test body at the first failing assertion.
//!
//! ```
//! use fixtura_core::assertion::{assert_equal, assert_true};
//! use fixtura_core::TestResult;
//!
//! fn body() -> TestResult {
//!     assert_equal("x", "x")?;
//!     assert_true(1 + 1 == 2, "arithmetic")?;
//!     Ok(())
//! }
//! assert!(body().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Outcome of a hook or test body
pub type TestResult = std::result::Result<(), TestFailure>;

/// Why a hook or test body did not complete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum TestFailure {
    /// An assertion did not hold
    #[error("assertion failed: expected {expected}, got {actual}{}", describe(.message))]
    Assertion {
        /// Rendered expected value
        expected: String,
        /// Rendered actual value
        actual: String,
        /// Optional context supplied by the caller
        message: Option<String>,
    },

    /// Any other fault raised by the code under test
    #[error("{0}")]
    Fault(String),
}

fn describe(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" ({})", m),
        None => String::new(),
    }
}

impl TestFailure {
    /// Wrap an arbitrary error as a fault
    pub fn fault(err: impl Display) -> Self {
        TestFailure::Fault(err.to_string())
    }

    /// Check if this failure came from an assertion
    pub fn is_assertion(&self) -> bool {
        matches!(self, TestFailure::Assertion { .. })
    }
}

/// Fail unless `expected == actual`.
pub fn assert_equal<E, A>(expected: E, actual: A) -> TestResult
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(TestFailure::Assertion {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
            message: None,
        })
    }
}

/// Fail unless `condition` holds.
pub fn assert_true(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(TestFailure::Assertion {
            expected: "true".to_string(),
            actual: "false".to_string(),
            message: Some(message.into()),
        })
    }
}
