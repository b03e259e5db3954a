//! Equipment catalog records and the frozen per-robot stat snapshot.
//!
//! The equipment catalog is an external collaborator: it hands us raw
//! records with optional numeric fields. Everything the simulation needs
//! is resolved *once* at purchase time into a fully populated
//! [`RobotStats`], so no downstream code ever re-checks for missing
//! fields.

use serde::{Deserialize, Serialize};

/// The closed set of autonomous robot kinds.
///
/// Resolved once from the equipment id when a robot is purchased and
/// carried on the unit; behavior per kind (need predicate, effect kind)
/// dispatches on this tag, never on the id string at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RobotKind {
    /// Cuts grass; services patches with low average health.
    Mower,
    /// Waters turf; services patches with low average moisture.
    Sprayer,
    /// Spreads fertilizer; services patches with low average nutrients.
    Spreader,
}

impl RobotKind {
    /// Infer the kind from a catalog equipment id.
    ///
    /// Catalog ids embed the machine family (`robot_mower_fairway`,
    /// `robot_sprinkler_greens`, ...). Unrecognized ids default to
    /// [`RobotKind::Mower`].
    #[must_use]
    pub fn from_equipment_id(equipment_id: &str) -> Self {
        if equipment_id.contains("mower") {
            Self::Mower
        } else if equipment_id.contains("sprayer") || equipment_id.contains("sprinkler") {
            Self::Sprayer
        } else if equipment_id.contains("fertilizer") || equipment_id.contains("spreader") {
            Self::Spreader
        } else {
            Self::Mower
        }
    }

    /// Stable lowercase label, used in logs and run metrics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mower => "mower",
            Self::Sprayer => "sprayer",
            Self::Spreader => "spreader",
        }
    }
}

/// Default efficiency when the catalog record omits it.
pub const DEFAULT_EFFICIENCY: f32 = 1.0;
/// Default movement speed in world units per minute.
pub const DEFAULT_SPEED: f32 = 1.0;
/// Default onboard resource capacity (fuel/battery).
pub const DEFAULT_RESOURCE_CAPACITY: f32 = 100.0;
/// Default fuel efficiency multiplier for passive resource drain.
pub const DEFAULT_FUEL_EFFICIENCY: f32 = 1.0;
/// Default operating cost per simulated hour.
pub const DEFAULT_OPERATING_COST_PER_HOUR: f32 = 0.0;
/// Default breakdown probability per simulated hour.
pub const DEFAULT_BREAKDOWN_RATE: f32 = 0.0;
/// Default forced repair time in minutes after a breakdown.
pub const DEFAULT_REPAIR_TIME_MINUTES: f32 = 60.0;

/// A raw equipment catalog record as supplied by the collaborator.
///
/// Numeric fields are optional; absent values resolve to the documented
/// defaults when frozen into [`RobotStats`]. A missing `purchase_cost`
/// is the one field that *rejects* a purchase instead of defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSpec {
    /// Whether this machine drives itself. Manual equipment cannot join
    /// the autonomous fleet.
    #[serde(default)]
    pub is_autonomous: bool,
    /// Work effect strength multiplier.
    #[serde(default)]
    pub efficiency: Option<f32>,
    /// Movement speed in world units per minute.
    #[serde(default)]
    pub speed: Option<f32>,
    /// Onboard resource capacity.
    #[serde(default)]
    pub resource_capacity: Option<f32>,
    /// Fuel efficiency multiplier (higher drains faster).
    #[serde(default)]
    pub fuel_efficiency: Option<f32>,
    /// Cash price at purchase.
    #[serde(default)]
    pub purchase_cost: Option<f32>,
    /// Running cost per simulated hour, reported to the economy ledger.
    #[serde(default)]
    pub operating_cost_per_hour: Option<f32>,
    /// Probability of a mechanical failure per simulated hour.
    #[serde(default)]
    pub breakdown_rate: Option<f32>,
    /// Minutes of forced downtime after a breakdown.
    #[serde(default)]
    pub repair_time_minutes: Option<f32>,
}

/// Immutable stat snapshot frozen onto a robot at purchase time.
///
/// Structurally fully populated: defaults are applied exactly once in
/// [`RobotStats::freeze`], so the invariant "a robot's stats are always
/// complete" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotStats {
    /// Work effect strength multiplier.
    pub efficiency: f32,
    /// Movement speed in world units per minute.
    pub speed: f32,
    /// Onboard resource capacity.
    pub resource_capacity: f32,
    /// Fuel efficiency multiplier for passive drain.
    pub fuel_efficiency: f32,
    /// Cash price paid at purchase (0 for directly constructed test
    /// units; the sell refund is then 0 as well).
    pub purchase_cost: f32,
    /// Running cost per simulated hour.
    pub operating_cost_per_hour: f32,
    /// Breakdown probability per simulated hour.
    pub breakdown_rate: f32,
    /// Minutes of forced downtime after a breakdown.
    pub repair_time_minutes: f32,
}

impl RobotStats {
    /// Resolve a raw catalog record into a complete snapshot.
    #[must_use]
    pub fn freeze(spec: &EquipmentSpec) -> Self {
        Self {
            efficiency: spec.efficiency.unwrap_or(DEFAULT_EFFICIENCY),
            speed: spec.speed.unwrap_or(DEFAULT_SPEED),
            resource_capacity: spec.resource_capacity.unwrap_or(DEFAULT_RESOURCE_CAPACITY),
            fuel_efficiency: spec.fuel_efficiency.unwrap_or(DEFAULT_FUEL_EFFICIENCY),
            purchase_cost: spec.purchase_cost.unwrap_or(0.0),
            operating_cost_per_hour: spec
                .operating_cost_per_hour
                .unwrap_or(DEFAULT_OPERATING_COST_PER_HOUR),
            breakdown_rate: spec.breakdown_rate.unwrap_or(DEFAULT_BREAKDOWN_RATE),
            repair_time_minutes: spec
                .repair_time_minutes
                .unwrap_or(DEFAULT_REPAIR_TIME_MINUTES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_inference_from_equipment_id() {
        assert_eq!(
            RobotKind::from_equipment_id("robot_mower_fairway"),
            RobotKind::Mower
        );
        assert_eq!(
            RobotKind::from_equipment_id("robot_sprayer_rough"),
            RobotKind::Sprayer
        );
        assert_eq!(
            RobotKind::from_equipment_id("auto_sprinkler_greens"),
            RobotKind::Sprayer
        );
        assert_eq!(
            RobotKind::from_equipment_id("fertilizer_cart"),
            RobotKind::Spreader
        );
        assert_eq!(
            RobotKind::from_equipment_id("robot_spreader_heavy"),
            RobotKind::Spreader
        );
    }

    #[test]
    fn test_kind_inference_default_is_mower() {
        assert_eq!(
            RobotKind::from_equipment_id("mystery_machine"),
            RobotKind::Mower
        );
    }

    #[test]
    fn test_freeze_applies_defaults() {
        let stats = RobotStats::freeze(&EquipmentSpec::default());
        assert_eq!(stats.efficiency, DEFAULT_EFFICIENCY);
        assert_eq!(stats.speed, DEFAULT_SPEED);
        assert_eq!(stats.resource_capacity, DEFAULT_RESOURCE_CAPACITY);
        assert_eq!(stats.fuel_efficiency, DEFAULT_FUEL_EFFICIENCY);
        assert_eq!(stats.purchase_cost, 0.0);
        assert_eq!(
            stats.operating_cost_per_hour,
            DEFAULT_OPERATING_COST_PER_HOUR
        );
        assert_eq!(stats.breakdown_rate, DEFAULT_BREAKDOWN_RATE);
        assert_eq!(stats.repair_time_minutes, DEFAULT_REPAIR_TIME_MINUTES);
    }

    #[test]
    fn test_freeze_prefers_explicit_values() {
        let spec = EquipmentSpec {
            is_autonomous: true,
            efficiency: Some(1.4),
            speed: Some(25.0),
            resource_capacity: Some(300.0),
            fuel_efficiency: Some(0.8),
            purchase_cost: Some(15_000.0),
            operating_cost_per_hour: Some(12.5),
            breakdown_rate: Some(0.02),
            repair_time_minutes: Some(90.0),
        };
        let stats = RobotStats::freeze(&spec);
        assert_eq!(stats.efficiency, 1.4);
        assert_eq!(stats.speed, 25.0);
        assert_eq!(stats.resource_capacity, 300.0);
        assert_eq!(stats.fuel_efficiency, 0.8);
        assert_eq!(stats.purchase_cost, 15_000.0);
        assert_eq!(stats.operating_cost_per_hour, 12.5);
        assert_eq!(stats.breakdown_rate, 0.02);
        assert_eq!(stats.repair_time_minutes, 90.0);
    }

    #[test]
    fn test_equipment_spec_serde_defaults_missing_fields() {
        let spec: EquipmentSpec =
            serde_json::from_str(r#"{"is_autonomous": true, "speed": 20.0}"#).unwrap();
        assert!(spec.is_autonomous);
        assert_eq!(spec.speed, Some(20.0));
        assert_eq!(spec.breakdown_rate, None);
        assert_eq!(spec.purchase_cost, None);
    }
}
