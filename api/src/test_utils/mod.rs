//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Service tests run against the in-memory repositories in `mocks`. Adapter
//! and HTTP tests use a real in-memory SQLite database instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
