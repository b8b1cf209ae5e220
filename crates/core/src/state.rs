//! Fixture state shared between hooks and tests
//!
//! A [`FixtureState`] has two scopes:
//! - **Suite** fields are written by the suite-setup hook and persist for the
//!   whole run. Tests may mutate them and later tests see those mutations.
//! - **Per-test** fields are cleared by the runner and rewritten by the
//!   per-test-setup hook before every test. Nothing a test writes here
//!   survives into the next test.
//!
//! The runner owns the state for a run and lends it `&mut` to one hook or
//! test at a time.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field scope inside a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Lives for the whole suite
    Suite,
    /// Reset before each test
    PerTest,
}

/// Mutable fixture data, split into suite and per-test fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureState {
    suite: BTreeMap<String, Value>,
    per_test: BTreeMap<String, Value>,
}

impl FixtureState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a suite field
    pub fn suite(&self, field: &str) -> Option<&Value> {
        self.suite.get(field)
    }

    /// Write a suite field, returning the previous value
    pub fn set_suite(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.suite.insert(field.into(), value.into())
    }

    /// Read a per-test field
    pub fn per_test(&self, field: &str) -> Option<&Value> {
        self.per_test.get(field)
    }

    /// Write a per-test field, returning the previous value
    pub fn set_per_test(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.per_test.insert(field.into(), value.into())
    }

    /// Read a field from the given scope
    pub fn get(&self, scope: Scope, field: &str) -> Option<&Value> {
        match scope {
            Scope::Suite => self.suite(field),
            Scope::PerTest => self.per_test(field),
        }
    }

    /// Write a field into the given scope
    pub fn set(&mut self, scope: Scope, field: impl Into<String>, value: impl Into<Value>) {
        match scope {
            Scope::Suite => self.set_suite(field, value),
            Scope::PerTest => self.set_per_test(field, value),
        };
    }

    /// Read a field holding a list of strings
    ///
    /// Returns `None` if the field is missing or not a list of strings.
    pub fn string_list(&self, scope: Scope, field: &str) -> Option<Vec<String>> {
        self.get(scope, field)?.to_string_list()
    }

    /// Drop every per-test field
    ///
    /// Called by the runner before each per-test-setup so that no field a
    /// previous test wrote can leak into the next one.
    pub fn reset_per_test(&mut self) {
        self.per_test.clear();
    }

    /// Names of the suite fields, sorted
    pub fn suite_fields(&self) -> impl Iterator<Item = &str> {
        self.suite.keys().map(String::as_str)
    }

    /// Names of the per-test fields, sorted
    pub fn per_test_fields(&self) -> impl Iterator<Item = &str> {
        self.per_test.keys().map(String::as_str)
    }
}
