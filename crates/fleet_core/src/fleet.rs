//! Fleet inventory: the aggregate root, purchase/sell, and counting
//! queries.

use serde::{Deserialize, Serialize};

use crate::equipment::{EquipmentSpec, RobotKind, RobotStats};
use crate::error::{FleetError, Result};
use crate::math::Vec2;
use crate::robot::{RobotState, RobotUnit};

/// Fraction of the purchase cost returned when a robot is sold.
pub const SELL_REFUND_FRACTION: f32 = 0.5;

/// The autonomous fleet: every owned robot plus the single charging
/// station they share. Insertion order of `robots` is purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetState {
    /// Owned robots, in purchase order.
    pub robots: Vec<RobotUnit>,
    /// Fixed dock location; new robots spawn here and return here to
    /// recharge.
    pub charging_station: Vec2,
}

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Id assigned to the new robot.
    pub robot_id: String,
    /// Cash cost to report to the economy ledger.
    pub cost: f32,
}

/// Per-state robot counts for status reporting.
///
/// `working` counts robots that are working *or* moving; the five
/// lifecycle states always partition the fleet, so
/// `working + idle + charging + broken == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FleetStatus {
    /// Total robots owned.
    pub total: usize,
    /// Robots working or moving.
    pub working: usize,
    /// Robots idle.
    pub idle: usize,
    /// Robots charging.
    pub charging: usize,
    /// Robots broken.
    pub broken: usize,
}

impl FleetState {
    /// Create an empty fleet docked at `charging_station`.
    #[must_use]
    pub fn new(charging_station: Vec2) -> Self {
        Self {
            robots: Vec::new(),
            charging_station,
        }
    }

    /// Buy a new robot from a raw catalog record.
    ///
    /// On success the robot is appended at the charging station, fully
    /// resourced and idle, with id `{equipment_id}_{n}` where `n` is
    /// derived from the robots already owned for that equipment id (no
    /// hidden global counter).
    ///
    /// # Errors
    ///
    /// [`FleetError::NotAutonomous`] if the record is not an autonomous
    /// unit; [`FleetError::MissingPurchaseCost`] if it has no price.
    /// The fleet is unchanged on error.
    pub fn purchase(&mut self, equipment_id: &str, spec: &EquipmentSpec) -> Result<PurchaseReceipt> {
        if !spec.is_autonomous {
            return Err(FleetError::NotAutonomous(equipment_id.to_string()));
        }
        let Some(cost) = spec.purchase_cost else {
            return Err(FleetError::MissingPurchaseCost(equipment_id.to_string()));
        };

        let suffix = self.next_id_suffix(equipment_id);
        let id = format!("{equipment_id}_{suffix}");
        let robot = RobotUnit::new(
            id.clone(),
            equipment_id.to_string(),
            RobotStats::freeze(spec),
            self.charging_station,
        );
        tracing::debug!(robot = %id, cost, "purchased robot");
        self.robots.push(robot);

        Ok(PurchaseReceipt { robot_id: id, cost })
    }

    /// Sell a robot, removing it from the fleet.
    ///
    /// Returns the refund: half the purchase cost, rounded down to a
    /// whole cash unit. Robots that never had a price refund 0.
    ///
    /// # Errors
    ///
    /// [`FleetError::RobotNotFound`] if no robot matches `robot_id`;
    /// the fleet is unchanged.
    pub fn sell(&mut self, robot_id: &str) -> Result<f32> {
        let index = self
            .robots
            .iter()
            .position(|r| r.id == robot_id)
            .ok_or_else(|| FleetError::RobotNotFound(robot_id.to_string()))?;
        let robot = self.robots.remove(index);
        let refund = (robot.stats.purchase_cost * SELL_REFUND_FRACTION).floor();
        tracing::debug!(robot = %robot.id, refund, "sold robot");
        Ok(refund)
    }

    /// Look up a robot by id.
    ///
    /// # Errors
    ///
    /// [`FleetError::RobotNotFound`] if no robot matches.
    pub fn robot(&self, robot_id: &str) -> Result<&RobotUnit> {
        self.robots
            .iter()
            .find(|r| r.id == robot_id)
            .ok_or_else(|| FleetError::RobotNotFound(robot_id.to_string()))
    }

    /// Look up a robot by id, mutably.
    ///
    /// # Errors
    ///
    /// [`FleetError::RobotNotFound`] if no robot matches.
    pub fn robot_mut(&mut self, robot_id: &str) -> Result<&mut RobotUnit> {
        self.robots
            .iter_mut()
            .find(|r| r.id == robot_id)
            .ok_or_else(|| FleetError::RobotNotFound(robot_id.to_string()))
    }

    /// Number of robots of the given machine family.
    #[must_use]
    pub fn count_by_kind(&self, kind: RobotKind) -> usize {
        self.robots.iter().filter(|r| r.kind == kind).count()
    }

    /// Number of robots purchased from the given equipment id.
    #[must_use]
    pub fn count_by_equipment(&self, equipment_id: &str) -> usize {
        self.robots
            .iter()
            .filter(|r| r.equipment_id == equipment_id)
            .count()
    }

    /// Number of robots actively working (working or moving).
    #[must_use]
    pub fn count_working(&self) -> usize {
        self.robots.iter().filter(|r| r.is_active()).count()
    }

    /// Number of robots down for repair.
    #[must_use]
    pub fn count_broken(&self) -> usize {
        self.robots
            .iter()
            .filter(|r| r.state == RobotState::Broken)
            .count()
    }

    /// Per-state breakdown of the whole fleet.
    #[must_use]
    pub fn status(&self) -> FleetStatus {
        let mut status = FleetStatus {
            total: self.robots.len(),
            ..FleetStatus::default()
        };
        for robot in &self.robots {
            match robot.state {
                RobotState::Working | RobotState::Moving => status.working += 1,
                RobotState::Idle => status.idle += 1,
                RobotState::Charging => status.charging += 1,
                RobotState::Broken => status.broken += 1,
            }
        }
        status
    }

    /// Next id suffix for `equipment_id`: one past the highest suffix
    /// among robots whose id has the exact `{equipment_id}_{digits}`
    /// form. Derived from the fleet itself so id assignment has no
    /// hidden state, and selling a robot can never free a suffix that
    /// a later purchase would reuse while its neighbor is still owned.
    fn next_id_suffix(&self, equipment_id: &str) -> usize {
        self.robots
            .iter()
            .filter_map(|r| parse_id_suffix(&r.id, equipment_id))
            .max()
            .map_or(1, |highest| highest + 1)
    }
}

/// Parse `n` out of an id of the exact form `{equipment_id}_{digits}`.
fn parse_id_suffix(id: &str, equipment_id: &str) -> Option<usize> {
    let suffix = id.strip_prefix(equipment_id)?.strip_prefix('_')?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}
