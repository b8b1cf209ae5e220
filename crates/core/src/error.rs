//! Error types for Fixtura
//!
//! This module defines the errors raised while registering fixtures and
//! loading configuration. Failures inside hooks and test bodies are not
//! errors of the runner; they are reported per test through
//! [`TestFailure`](crate::TestFailure).
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::outcome::HookRole;
use std::io;
use thiserror::Error;

/// Result type alias for Fixtura operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fixture registration and runner configuration
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading or writing config files)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// A lifecycle hook role was registered twice
    #[error("Fixture '{fixture}' registers more than one {role} hook")]
    DuplicateHook {
        /// Fixture name
        fixture: String,
        /// Role registered twice
        role: HookRole,
    },

    /// Two tests share a name
    #[error("Fixture '{fixture}' registers test '{test}' more than once")]
    DuplicateTest {
        /// Fixture name
        fixture: String,
        /// Test name registered twice
        test: String,
    },

    /// Test name is empty or otherwise unusable
    #[error("Fixture '{fixture}' has an invalid test name: {reason}")]
    InvalidTestName {
        /// Fixture name
        fixture: String,
        /// What is wrong with the name
        reason: String,
    },

    /// No fixture registered under this name
    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),

    /// Configuration could not be parsed or holds an invalid value
    #[error("Configuration error: {0}")]
    Config(String),
}
