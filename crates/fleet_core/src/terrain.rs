//! Terrain-facing boundary types.
//!
//! Work candidates come *in* from the terrain collaborator as a read-only
//! snapshot; terrain effects go *out* for the collaborator to apply.
//! This core never mutates terrain directly.

use serde::{Deserialize, Serialize};

use crate::equipment::RobotKind;
use crate::math::Vec2;

/// Surface classification of a terrain patch.
///
/// Mirrors the terrain collaborator's type codes; the simulation only
/// cares about walkability, but the full set is kept so candidate
/// snapshots round-trip without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Putting green.
    Green,
    /// Tee box.
    Tee,
    /// Fairway turf.
    Fairway,
    /// Rough grass.
    Rough,
    /// Sand bunker.
    Bunker,
    /// Cart path or walkway.
    Path,
    /// Water hazard. Robots never drive here.
    Water,
}

impl SurfaceKind {
    /// Whether ground units can drive onto this surface.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Water)
    }
}

/// A terrain cell or aggregated patch the scheduler may assign a robot
/// to service. Produced by the terrain collaborator before each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkCandidate {
    /// Patch center on the ground plane.
    pub position: Vec2,
    /// Average grass health over the patch, 0-100.
    pub avg_health: f32,
    /// Average soil moisture over the patch, 0-100.
    pub avg_moisture: f32,
    /// Average soil nutrients over the patch, 0-100.
    pub avg_nutrients: f32,
    /// Surface classification.
    pub surface: SurfaceKind,
    /// Number of mesh faces/cells aggregated into this patch.
    /// Informational only; never used for scheduling decisions.
    pub cell_count: u32,
}

/// A terrain-modification instruction emitted when a robot services a
/// patch. Returned from the tick, applied by the terrain collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainEffect {
    /// Which machine family produced the effect (decides whether it
    /// raises health, moisture, or nutrients).
    pub kind: RobotKind,
    /// Where to apply it.
    pub position: Vec2,
    /// Effect strength, scaled by the robot's efficiency.
    pub magnitude: f32,
}
