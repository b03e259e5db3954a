//! # Fleet Core
//!
//! Deterministic simulation core for the autonomous greenkeeping fleet.
//!
//! This crate contains **only** in-process computation:
//! - No rendering
//! - No IO
//! - No system randomness (the breakdown RNG is caller-injected)
//!
//! The host simulation calls [`scheduler::tick`] once per simulated time
//! advance with the fleet, a read-only snapshot of terrain work
//! candidates, and a seeded RNG; it gets back terrain effects for the
//! renderer and an operating cost for the economy ledger. Everything
//! else - purchase, sell, counting queries, catalog queries - is a small
//! synchronous API over plain data.
//!
//! ## Crate Structure
//!
//! - [`robot`] - per-unit record and lifecycle states
//! - [`fleet`] - inventory: purchase, sell, counts, status
//! - [`selector`] - nearest-candidate work search per robot kind
//! - [`scheduler`] - the per-tick state machine
//! - [`catalog`] - research-gated purchase availability
//! - [`terrain`] - candidate/effect boundary types
//! - [`math`] - ground-plane vector math

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod equipment;
pub mod error;
pub mod fleet;
pub mod math;
pub mod robot;
pub mod scheduler;
pub mod selector;
pub mod terrain;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{
        available_for_purchase, EquipmentCatalog, EquipmentDefinition, PurchaseOption,
        ResearchState,
    };
    pub use crate::equipment::{EquipmentSpec, RobotKind, RobotStats};
    // The `Result<T>` alias stays out of the prelude so glob imports
    // never shadow `std::result::Result` in downstream signatures.
    pub use crate::error::FleetError;
    pub use crate::fleet::{FleetState, FleetStatus, PurchaseReceipt};
    pub use crate::math::Vec2;
    pub use crate::robot::{Destination, NavTarget, RobotState, RobotUnit};
    pub use crate::scheduler::{tick, TickConfig, TickReport};
    pub use crate::selector::select_work;
    pub use crate::terrain::{SurfaceKind, TerrainEffect, WorkCandidate};
}
