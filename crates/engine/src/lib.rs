//! Test lifecycle engine for Fixtura
//!
//! This crate runs fixtures:
//! - [`Fixture`] / [`FixtureBuilder`]: explicit registration of hooks and tests
//! - [`SuiteRunner`]: sequential execution with per-test state reset
//! - [`RunnerConfig`]: `fixtura.toml` settings (setup failure policy, fail-fast, filter)
//!
//! Tests never run in parallel: later tests may depend on suite fields that
//! earlier tests mutated, so discovery order is execution order.

#![warn(missing_docs)]

pub mod config;
pub mod fixture;
pub mod runner;

pub use config::{RunnerConfig, SetupFailurePolicy, CONFIG_FILE_NAME};
pub use fixture::{Fixture, FixtureBuilder, HookFn, TestCase};
pub use runner::SuiteRunner;
