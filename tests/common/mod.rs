//! Common test utilities for integration tests.
//!
//! Provides a fake `p4` executable so the executor can be tested without a
//! Perforce server.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

pub mod fake_p4;

pub use fake_p4::FakeP4;
