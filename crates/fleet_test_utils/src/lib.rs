//! Shared test utilities for the fleet simulation workspace.
//!
//! Fixtures here keep integration tests terse: standard equipment
//! specs, pre-built robots, and terrain patches at known levels.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;

pub use fixtures::*;
