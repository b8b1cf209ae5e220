//! Core types for Fixtura
//!
//! This crate defines the types shared by the runner and by fixtures:
//! - Value: Field value stored in fixture state
//! - FixtureState: Suite-scoped and per-test-scoped fields
//! - Assertions: `assert_equal`, `assert_true` and the `TestFailure` they return
//! - Outcomes: TestOutcome, TestReport, SuiteReport, LifecycleEvent
//! - Error: Registration and configuration errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assertion;
pub mod error;
pub mod outcome;
pub mod state;
pub mod value;

pub use assertion::{assert_equal, assert_true, TestFailure, TestResult};
pub use error::{Error, Result};
pub use outcome::{
    ErrorReason, HookRole, LifecycleEvent, SkipReason, SuiteReport, TestOutcome, TestReport,
};
pub use state::{FixtureState, Scope};
pub use value::Value;
