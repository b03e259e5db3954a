//! Scenario loading and configuration.
//!
//! Scenarios define a complete headless run: the equipment catalog,
//! research already completed, the purchase list, a rectangular grid of
//! terrain patches with starting condition levels, and the tick plan.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleet_core::prelude::*;

/// Error type for scenario operations.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// File not found.
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] ron::error::SpannedError),
}

/// One line in the scenario's shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchasePlan {
    /// Catalog id to buy.
    pub equipment_id: String,
    /// How many to buy.
    pub count: u32,
}

/// A rectangular grid of terrain patches with uniform starting levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PatchGridSpec {
    /// World position of the first patch.
    pub origin: (f32, f32),
    /// Patches along x.
    pub cols: u32,
    /// Patches along z.
    pub rows: u32,
    /// Distance between patch centers.
    pub spacing: f32,
    /// Starting average grass health, 0-100.
    pub health: f32,
    /// Starting average moisture, 0-100.
    pub moisture: f32,
    /// Starting average nutrients, 0-100.
    pub nutrients: f32,
}

/// A complete scenario configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Charging station position; robots spawn and recharge here.
    pub charging_station: (f32, f32),
    /// Equipment catalog for this run.
    pub catalog: Vec<EquipmentDefinition>,
    /// Research ids completed before the run starts.
    pub completed_research: Vec<String>,
    /// Robots to buy before the first tick.
    pub purchases: Vec<PurchasePlan>,
    /// The course, as a patch grid.
    pub grid: PatchGridSpec,
    /// Number of ticks to run.
    pub ticks: u32,
    /// Simulated minutes per tick.
    pub delta_minutes: f32,
    /// RNG seed for breakdown rolls.
    pub seed: u64,
    /// Whether the fleet-AI breakdown-reduction upgrade is active.
    pub fleet_ai: bool,
    /// Downward drift applied to every patch stat each tick, standing
    /// in for the grass model so the fleet never runs out of work.
    pub condition_drift_per_tick: f32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "Nine Holes".to_string(),
            description: "A mid-condition nine-hole course with one robot of each kind".to_string(),
            charging_station: (0.0, 0.0),
            catalog: default_catalog(),
            completed_research: vec![
                "auto_irrigation".to_string(),
                "soil_science".to_string(),
            ],
            purchases: vec![
                PurchasePlan {
                    equipment_id: "robot_mower_fairway".to_string(),
                    count: 1,
                },
                PurchasePlan {
                    equipment_id: "robot_sprayer_rough".to_string(),
                    count: 1,
                },
                PurchasePlan {
                    equipment_id: "robot_spreader_heavy".to_string(),
                    count: 1,
                },
            ],
            grid: PatchGridSpec {
                origin: (5.0, 5.0),
                cols: 8,
                rows: 8,
                spacing: 5.0,
                health: 55.0,
                moisture: 25.0,
                nutrients: 25.0,
            },
            ticks: 120,
            delta_minutes: 5.0,
            seed: 42,
            fleet_ai: false,
            condition_drift_per_tick: 0.1,
        }
    }
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let scenario: Scenario = ron::from_str(&contents)?;
        Ok(scenario)
    }

    /// Load from a RON string (useful for embedded scenarios).
    pub fn from_ron_str(ron: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = ron::from_str(ron)?;
        Ok(scenario)
    }
}

fn default_catalog() -> Vec<EquipmentDefinition> {
    vec![
        EquipmentDefinition {
            equipment_id: "robot_mower_fairway".to_string(),
            spec: EquipmentSpec {
                is_autonomous: true,
                efficiency: Some(1.2),
                speed: Some(10.0),
                resource_capacity: Some(300.0),
                fuel_efficiency: Some(1.0),
                purchase_cost: Some(15_000.0),
                operating_cost_per_hour: Some(6.0),
                breakdown_rate: Some(0.02),
                repair_time_minutes: Some(60.0),
            },
            required_research: None,
        },
        EquipmentDefinition {
            equipment_id: "robot_sprayer_rough".to_string(),
            spec: EquipmentSpec {
                is_autonomous: true,
                efficiency: Some(1.0),
                speed: Some(8.0),
                resource_capacity: Some(250.0),
                fuel_efficiency: Some(0.8),
                purchase_cost: Some(12_000.0),
                operating_cost_per_hour: Some(4.0),
                breakdown_rate: Some(0.015),
                repair_time_minutes: Some(45.0),
            },
            required_research: Some("auto_irrigation".to_string()),
        },
        EquipmentDefinition {
            equipment_id: "robot_spreader_heavy".to_string(),
            spec: EquipmentSpec {
                is_autonomous: true,
                efficiency: Some(1.5),
                speed: Some(6.0),
                resource_capacity: Some(400.0),
                fuel_efficiency: Some(1.3),
                purchase_cost: Some(18_000.0),
                operating_cost_per_hour: Some(8.0),
                breakdown_rate: Some(0.025),
                repair_time_minutes: Some(90.0),
            },
            required_research: Some("soil_science".to_string()),
        },
    ]
}
