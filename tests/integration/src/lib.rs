//! Integration test utilities for the livepipe server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with live PostgreSQL and Redis backends.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
