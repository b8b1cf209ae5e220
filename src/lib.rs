//! Fixtura - sequential test lifecycle runner
//!
//! Fixtura runs suites of tests registered explicitly on a [`Fixture`]:
//! one optional suite-setup hook, one optional per-test-setup hook and an
//! ordered list of tests. State is passed by `&mut` to every hook and test
//! through [`FixtureState`], which has suite-scoped fields (kept for the
//! whole run) and per-test fields (rebuilt before every test).
//!
//! # Quick Start
//!
//! ```
//! use fixtura::{assert_equal, Fixture, SuiteRunner, Value};
//!
//! let fixture = Fixture::builder("greeting")
//!     .suite_setup(|state| {
//!         state.set_suite("greeting", "hello");
//!         Ok(())
//!     })
//!     .per_test_setup(|state| {
//!         state.set_per_test("name", "world");
//!         Ok(())
//!     })
//!     .test("reads both scopes", |state| {
//!         assert_equal(Some("hello"), state.suite("greeting").and_then(Value::as_str))?;
//!         assert_equal(Some("world"), state.per_test("name").and_then(Value::as_str))
//!     })
//!     .build()?;
//!
//! let report = SuiteRunner::default().run(&fixture);
//! assert!(report.is_success());
//! # Ok::<(), fixtura::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `fixtura-core`: values, fixture state, assertions and reports
//! - `fixtura-engine`: fixture registration, the runner and its configuration
//! - `fixtura-samples`: reference fixtures and the code they test

pub use fixtura_core::*;
pub use fixtura_engine::{
    Fixture, FixtureBuilder, HookFn, RunnerConfig, SetupFailurePolicy, SuiteRunner, TestCase,
    CONFIG_FILE_NAME,
};
pub use fixtura_samples as samples;
