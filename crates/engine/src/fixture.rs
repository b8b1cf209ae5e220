//! Fixture registration
//!
//! A [`Fixture`] lists, explicitly, the hooks and tests of one suite:
//! - at most one suite-setup hook (runs once, before any test)
//! - at most one per-test-setup hook (runs before every test)
//! - an ordered list of tests; registration order is discovery order
//!
//! Fixtures are assembled with [`FixtureBuilder`] and validated by
//! [`FixtureBuilder::build`], so a `Fixture` in hand is always well formed.
//!
//! ## Example
//!
//! ```
//! use fixtura_core::{assert_equal, Value};
//! use fixtura_engine::Fixture;
//!
//! let fixture = Fixture::builder("counter")
//!     .suite_setup(|state| {
//!         state.set_suite("runs", 0i64);
//!         Ok(())
//!     })
//!     .test("increments", |state| {
//!         let runs = state.suite("runs").and_then(Value::as_int).unwrap_or(0);
//!         state.set_suite("runs", runs + 1);
//!         assert_equal(Some(1), state.suite("runs").and_then(Value::as_int))
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fixture.test_names().collect::<Vec<_>>(), vec!["increments"]);
//! ```

use fixtura_core::{Error, FixtureState, HookRole, Result, TestResult};
use std::collections::HashSet;
use std::fmt;

/// Signature shared by hooks and test bodies
pub type HookFn = Box<dyn Fn(&mut FixtureState) -> TestResult>;

/// One registered test
pub struct TestCase {
    name: String,
    body: HookFn,
}

impl TestCase {
    /// Test name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn run(&self, state: &mut FixtureState) -> TestResult {
        (self.body)(state)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// A validated suite: hooks plus tests in discovery order
pub struct Fixture {
    name: String,
    suite_setup: Option<HookFn>,
    per_test_setup: Option<HookFn>,
    tests: Vec<TestCase>,
}

impl Fixture {
    /// Start registering a fixture
    pub fn builder(name: impl Into<String>) -> FixtureBuilder {
        FixtureBuilder::new(name)
    }

    /// Fixture name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tests in discovery order
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    /// Test names in discovery order
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(TestCase::name)
    }

    /// Check whether a hook is registered for `role`
    pub fn has_hook(&self, role: HookRole) -> bool {
        self.hook(role).is_some()
    }

    pub(crate) fn hook(&self, role: HookRole) -> Option<&HookFn> {
        match role {
            HookRole::SuiteSetup => self.suite_setup.as_ref(),
            HookRole::PerTestSetup => self.per_test_setup.as_ref(),
        }
    }
}

impl fmt::Debug for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("name", &self.name)
            .field("suite_setup", &self.suite_setup.is_some())
            .field("per_test_setup", &self.per_test_setup.is_some())
            .field("tests", &self.tests)
            .finish()
    }
}

/// Builder for [`Fixture`]
///
/// Registration errors are collected and reported by [`build`](Self::build),
/// which keeps the chained call style free of intermediate `Result`s.
pub struct FixtureBuilder {
    name: String,
    suite_setup: Option<HookFn>,
    per_test_setup: Option<HookFn>,
    tests: Vec<TestCase>,
    duplicate_hook: Option<HookRole>,
}

impl FixtureBuilder {
    /// Create a builder for a fixture named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suite_setup: None,
            per_test_setup: None,
            tests: Vec::new(),
            duplicate_hook: None,
        }
    }

    /// Register the suite-setup hook
    pub fn suite_setup<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut FixtureState) -> TestResult + 'static,
    {
        if self.suite_setup.is_some() {
            self.duplicate_hook.get_or_insert(HookRole::SuiteSetup);
        }
        self.suite_setup = Some(Box::new(hook));
        self
    }

    /// Register the per-test-setup hook
    pub fn per_test_setup<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut FixtureState) -> TestResult + 'static,
    {
        if self.per_test_setup.is_some() {
            self.duplicate_hook.get_or_insert(HookRole::PerTestSetup);
        }
        self.per_test_setup = Some(Box::new(hook));
        self
    }

    /// Register a test; tests run in registration order
    pub fn test<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut FixtureState) -> TestResult + 'static,
    {
        self.tests.push(TestCase {
            name: name.into(),
            body: Box::new(body),
        });
        self
    }

    /// Validate the registration and produce a [`Fixture`]
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateHook`] if a hook role was registered twice
    /// - [`Error::InvalidTestName`] if a test name is empty or blank
    /// - [`Error::DuplicateTest`] if two tests share a name
    pub fn build(self) -> Result<Fixture> {
        if let Some(role) = self.duplicate_hook {
            return Err(Error::DuplicateHook {
                fixture: self.name,
                role,
            });
        }

        let mut seen = HashSet::new();
        for test in &self.tests {
            if test.name.trim().is_empty() {
                return Err(Error::InvalidTestName {
                    fixture: self.name.clone(),
                    reason: "test name must not be empty".to_string(),
                });
            }
            if !seen.insert(test.name.as_str()) {
                return Err(Error::DuplicateTest {
                    fixture: self.name.clone(),
                    test: test.name.clone(),
                });
            }
        }

        Ok(Fixture {
            name: self.name,
            suite_setup: self.suite_setup,
            per_test_setup: self.per_test_setup,
            tests: self.tests,
        })
    }
}
