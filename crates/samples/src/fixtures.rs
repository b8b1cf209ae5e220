//! Reference fixtures
//!
//! Two suites built around the same two tests:
//!
//! - [`reference_fixture`] keeps the list in a per-test field. Each test
//!   starts from `["a", "b", "c"]`, so the second test still sees `"a"` at
//!   index 0 while the suite field written by the first test persists.
//! - [`chained_fixture`] keeps the list in a suite field. The second test
//!   starts from what the first one left behind and ends at
//!   `["x", "x", "c"]`.

use crate::list_manipulation::{set_first_to_x, set_second_to_x};
use fixtura_core::{
    assert_equal, assert_true, Error, FixtureState, Result, Scope, TestFailure, TestResult, Value,
};
use fixtura_engine::Fixture;
use tracing::info;

/// Suite field written once by suite-setup
pub const FOR_ALL_TESTS: &str = "for_all_tests";
/// List field the tests manipulate
pub const FOR_EVERY_TEST: &str = "for_every_test";

/// Name of [`reference_fixture`]
pub const REFERENCE: &str = "list_manipulation";
/// Name of [`chained_fixture`]
pub const CHAINED: &str = "list_manipulation_chained";

fn initial_list() -> Value {
    Value::string_list(["a", "b", "c"])
}

fn read_list(state: &FixtureState, scope: Scope) -> std::result::Result<Vec<String>, TestFailure> {
    state
        .string_list(scope, FOR_EVERY_TEST)
        .ok_or_else(|| TestFailure::fault(format!("field '{}' is not initialized", FOR_EVERY_TEST)))
}

fn announce(state: &FixtureState, scope: Scope, test: &str) {
    info!(
        target: "fixtura::samples",
        test,
        for_all_tests = ?state.suite(FOR_ALL_TESTS),
        for_every_test = ?state.get(scope, FOR_EVERY_TEST),
        "Test starting"
    );
}

/// List kept per test; per-test-setup resets it before each test.
pub fn reference_fixture() -> Result<Fixture> {
    Fixture::builder(REFERENCE)
        .suite_setup(|state| {
            state.set_suite(FOR_ALL_TESTS, "forAllTests");
            Ok(())
        })
        .per_test_setup(|state| {
            state.set_per_test(FOR_EVERY_TEST, initial_list());
            Ok(())
        })
        .test("test1", |state| -> TestResult {
            announce(state, Scope::PerTest, "test1");
            let list = set_first_to_x(&read_list(state, Scope::PerTest)?)?;
            state.set_per_test(FOR_EVERY_TEST, list.clone());
            state.set_suite(FOR_ALL_TESTS, "test1Executed");

            assert_equal("x", list[0].as_str())
        })
        .test("test2", |state| -> TestResult {
            announce(state, Scope::PerTest, "test2");
            let list = set_second_to_x(&read_list(state, Scope::PerTest)?)?;
            state.set_per_test(FOR_EVERY_TEST, list.clone());

            assert_equal("x", list[1].as_str())?;
            assert_true(list[0] == "a", "first element is still \"a\"")
        })
        .build()
}

/// List kept at suite level; the second test builds on the first.
pub fn chained_fixture() -> Result<Fixture> {
    Fixture::builder(CHAINED)
        .suite_setup(|state| {
            state.set_suite(FOR_ALL_TESTS, "forAllTests");
            state.set_suite(FOR_EVERY_TEST, initial_list());
            Ok(())
        })
        .test("test1", |state| -> TestResult {
            announce(state, Scope::Suite, "test1");
            let list = set_first_to_x(&read_list(state, Scope::Suite)?)?;
            state.set_suite(FOR_EVERY_TEST, list.clone());
            state.set_suite(FOR_ALL_TESTS, "test1Executed");

            assert_equal(vec!["x", "b", "c"], list)
        })
        .test("test2", |state| -> TestResult {
            announce(state, Scope::Suite, "test2");
            assert_equal(
                Some("test1Executed"),
                state.suite(FOR_ALL_TESTS).and_then(Value::as_str),
            )?;
            let list = set_second_to_x(&read_list(state, Scope::Suite)?)?;
            state.set_suite(FOR_EVERY_TEST, list.clone());

            assert_equal(vec!["x", "x", "c"], list.clone())?;
            assert_true(list[0] == "x", "first element was already replaced")
        })
        .build()
}

/// Every reference fixture, in listing order
pub fn all_fixtures() -> Result<Vec<Fixture>> {
    Ok(vec![reference_fixture()?, chained_fixture()?])
}

/// Look up a reference fixture by name
///
/// # Errors
///
/// [`Error::UnknownFixture`] if no fixture has that name.
pub fn fixture_by_name(name: &str) -> Result<Fixture> {
    match name {
        REFERENCE => reference_fixture(),
        CHAINED => chained_fixture(),
        other => Err(Error::UnknownFixture(other.to_string())),
    }
}
