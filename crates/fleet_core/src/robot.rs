//! The per-unit data record and its lifecycle state.

use serde::{Deserialize, Serialize};

use crate::equipment::{RobotKind, RobotStats};
use crate::math::Vec2;

/// Lifecycle state of a robot. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RobotState {
    /// Parked, scanning for work each tick.
    #[default]
    Idle,
    /// Driving toward the current [`NavTarget`].
    Moving,
    /// At a work site, emitting its one-shot terrain effect this tick.
    Working,
    /// Docked at the charging station, replenishing resource.
    Charging,
    /// Down for forced repair; counts `breakdown_minutes_remaining` down.
    Broken,
}

/// What a moving robot is driving toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// A terrain work candidate; arrival triggers a work pulse.
    WorkSite,
    /// The fleet's charging station; arrival starts charging.
    ChargingStation,
}

/// Navigation target for a robot in the [`RobotState::Moving`] state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavTarget {
    /// Destination point on the ground plane.
    pub position: Vec2,
    /// Why the robot is going there.
    pub destination: Destination,
}

/// One autonomous maintenance unit.
///
/// Created only by a successful purchase (or directly in tests), mutated
/// only by the tick scheduler, removed only by an explicit sell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotUnit {
    /// Unique id within the fleet, `{equipment_id}_{n}`.
    pub id: String,
    /// Source catalog identifier, e.g. `robot_mower_fairway`.
    pub equipment_id: String,
    /// Machine family, resolved once at purchase time.
    pub kind: RobotKind,
    /// Immutable stat snapshot frozen at purchase time.
    pub stats: RobotStats,
    /// Current position on the ground plane.
    pub position: Vec2,
    /// Depletable onboard resource (fuel/battery).
    pub resource_current: f32,
    /// Resource capacity; `resource_current` never exceeds this.
    pub resource_max: f32,
    /// Current lifecycle state.
    pub state: RobotState,
    /// Destination while moving, `None` otherwise.
    pub target: Option<NavTarget>,
    /// Minutes of forced repair left while broken; 0 otherwise.
    pub breakdown_minutes_remaining: f32,
}

impl RobotUnit {
    /// Create a new idle, fully resourced robot at `position`.
    #[must_use]
    pub fn new(id: String, equipment_id: String, stats: RobotStats, position: Vec2) -> Self {
        let kind = RobotKind::from_equipment_id(&equipment_id);
        Self {
            id,
            equipment_id,
            kind,
            stats,
            position,
            resource_current: stats.resource_capacity,
            resource_max: stats.resource_capacity,
            state: RobotState::Idle,
            target: None,
            breakdown_minutes_remaining: 0.0,
        }
    }

    /// Whether the robot counts as actively working (working or moving).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, RobotState::Working | RobotState::Moving)
    }

    /// Onboard resource as a fraction of capacity, in `[0, 1]`.
    ///
    /// A zero-capacity robot reads as full so it never chases the
    /// charging station.
    #[must_use]
    pub fn resource_fraction(&self) -> f32 {
        if self.resource_max <= 0.0 {
            1.0
        } else {
            self.resource_current / self.resource_max
        }
    }
}
