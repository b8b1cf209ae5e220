//! Sample code for Fixtura
//!
//! - [`list_manipulation`]: the functions the reference fixtures test
//! - [`fixtures`]: reference suites exercising suite and per-test state
//! - [`streams`]: small iterator demonstrations

#![warn(missing_docs)]

pub mod fixtures;
pub mod list_manipulation;
pub mod streams;

pub use fixtures::{all_fixtures, chained_fixture, fixture_by_name, reference_fixture};
pub use list_manipulation::{set_first_to_x, set_second_to_x, ListError};
