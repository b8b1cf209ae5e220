//! Lifecycle integration tests
//!
//! Run whole fixtures through the public `fixtura` API and check:
//! - hook/test ordering
//! - suite fields persist across tests, per-test fields do not
//! - failures, faults and panics stay scoped to one test
//! - setup failure policies
//! - the reference fixtures end to end
//! - runner configuration loaded from disk

#[path = "../common/mod.rs"]
mod common;

mod config_file;
mod failure_scoping;
mod ordering;
