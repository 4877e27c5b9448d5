//! Test utilities
//!
//! In-memory port implementations and test fixtures for unit testing.
//!
//! The in-memory repository is used for behavioral tests (state after a
//! sequence of calls). Interaction tests that must prove a store method is
//! never called use a `mockall` mock declared next to the test.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
