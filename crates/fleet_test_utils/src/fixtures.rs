//! Standard fixtures shared across integration tests.

use fleet_core::prelude::*;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A deterministic RNG for tests. Same seed, same breakdown rolls.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A reliable fairway mower: no breakdowns, 300 capacity, 10 units/min.
#[must_use]
pub fn mower_spec() -> EquipmentSpec {
    EquipmentSpec {
        is_autonomous: true,
        efficiency: Some(1.2),
        speed: Some(10.0),
        resource_capacity: Some(300.0),
        fuel_efficiency: Some(1.0),
        purchase_cost: Some(15_000.0),
        operating_cost_per_hour: Some(6.0),
        breakdown_rate: Some(0.0),
        repair_time_minutes: Some(60.0),
    }
}

/// A sprayer variant of [`mower_spec`].
#[must_use]
pub fn sprayer_spec() -> EquipmentSpec {
    EquipmentSpec {
        purchase_cost: Some(12_000.0),
        ..mower_spec()
    }
}

/// A spreader variant of [`mower_spec`].
#[must_use]
pub fn spreader_spec() -> EquipmentSpec {
    EquipmentSpec {
        purchase_cost: Some(18_000.0),
        ..mower_spec()
    }
}

/// A directly constructed robot for scheduler tests, bypassing purchase.
#[must_use]
pub fn robot_at(equipment_id: &str, suffix: u32, position: Vec2) -> RobotUnit {
    RobotUnit::new(
        format!("{equipment_id}_{suffix}"),
        equipment_id.to_string(),
        RobotStats::freeze(&mower_spec()),
        position,
    )
}

/// A fairway patch with explicit need levels.
#[must_use]
pub fn patch(x: f32, z: f32, health: f32, moisture: f32, nutrients: f32) -> WorkCandidate {
    WorkCandidate {
        position: Vec2::new(x, z),
        avg_health: health,
        avg_moisture: moisture,
        avg_nutrients: nutrients,
        surface: SurfaceKind::Fairway,
        cell_count: 4,
    }
}

/// A patch with nothing to do: full health, moisture, and nutrients.
#[must_use]
pub fn pristine_patch(x: f32, z: f32) -> WorkCandidate {
    patch(x, z, 100.0, 100.0, 100.0)
}

/// A three-entry catalog covering every robot kind, with the sprayer
/// and spreader research-gated.
#[must_use]
pub fn standard_catalog() -> EquipmentCatalog {
    EquipmentCatalog {
        definitions: vec![
            EquipmentDefinition {
                equipment_id: "robot_mower_fairway".to_string(),
                spec: mower_spec(),
                required_research: None,
            },
            EquipmentDefinition {
                equipment_id: "robot_sprayer_rough".to_string(),
                spec: sprayer_spec(),
                required_research: Some("auto_irrigation".to_string()),
            },
            EquipmentDefinition {
                equipment_id: "robot_spreader_heavy".to_string(),
                spec: spreader_spec(),
                required_research: Some("soil_science".to_string()),
            },
        ],
    }
}
