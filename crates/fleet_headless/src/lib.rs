//! Headless fleet runner.
//!
//! Drives the fleet core against a synthetic course for a scripted
//! number of ticks, standing in for the terrain collaborator by
//! applying returned effects to a local patch grid. Used for tuning
//! scheduler constants and CI smoke runs; never in the shipping game.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod runner;
pub mod scenario;
