//! List manipulation exercised by the reference fixtures
//!
//! Both functions return a modified copy and never touch their input.

use fixtura_core::TestFailure;
use thiserror::Error;

/// Placeholder written by the manipulation functions
pub const MARKER: &str = "x";

/// Errors from list manipulation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The list is too short for the requested index
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Index that was requested
        index: usize,
        /// Length of the list
        len: usize,
    },
}

impl From<ListError> for TestFailure {
    fn from(e: ListError) -> Self {
        TestFailure::fault(e)
    }
}

fn replace_at(seq: &[String], index: usize) -> Result<Vec<String>, ListError> {
    if index >= seq.len() {
        return Err(ListError::IndexOutOfBounds {
            index,
            len: seq.len(),
        });
    }
    let mut copy = seq.to_vec();
    copy[index] = MARKER.to_string();
    Ok(copy)
}

/// Copy of `seq` with element 0 replaced by `"x"`.
///
/// # Errors
///
/// [`ListError::IndexOutOfBounds`] if `seq` is empty.
pub fn set_first_to_x(seq: &[String]) -> Result<Vec<String>, ListError> {
    replace_at(seq, 0)
}

/// Copy of `seq` with element 1 replaced by `"x"`.
///
/// # Errors
///
/// [`ListError::IndexOutOfBounds`] if `seq` has fewer than 2 elements.
pub fn set_second_to_x(seq: &[String]) -> Result<Vec<String>, ListError> {
    replace_at(seq, 1)
}
