//! Tick loop benchmarks for fleet_core.
//!
//! Run with: `cargo bench -p fleet_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fleet_core::prelude::*;

fn build_fleet(robots: u32) -> FleetState {
    let spec = EquipmentSpec {
        is_autonomous: true,
        speed: Some(12.0),
        resource_capacity: Some(300.0),
        purchase_cost: Some(15_000.0),
        breakdown_rate: Some(0.01),
        ..EquipmentSpec::default()
    };
    let mut fleet = FleetState::new(Vec2::ZERO);
    for i in 0..robots {
        let equipment_id = match i % 3 {
            0 => "robot_mower_fairway",
            1 => "robot_sprayer_rough",
            _ => "robot_spreader_heavy",
        };
        let receipt = fleet
            .purchase(equipment_id, &spec)
            .expect("bench fleet purchase");
        let robot = fleet.robot_mut(&receipt.robot_id).expect("bench robot");
        robot.position = Vec2::new((i % 20) as f32 * 4.0, (i / 20) as f32 * 4.0);
    }
    fleet
}

fn build_candidates(side: u32) -> Vec<WorkCandidate> {
    (0..side * side)
        .map(|i| WorkCandidate {
            position: Vec2::new((i % side) as f32 * 3.0, (i / side) as f32 * 3.0),
            avg_health: (i % 100) as f32,
            avg_moisture: ((i * 7) % 100) as f32,
            avg_nutrients: ((i * 13) % 100) as f32,
            surface: if i % 17 == 0 {
                SurfaceKind::Water
            } else {
                SurfaceKind::Fairway
            },
            cell_count: 4,
        })
        .collect()
}

/// Benchmarks a full fleet tick against a dense candidate grid.
pub fn tick_benchmark(c: &mut Criterion) {
    let candidates = build_candidates(20);
    let config = TickConfig::default();

    c.bench_function("tick_50_robots_400_patches", |b| {
        let fleet = build_fleet(50);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| {
            let mut fleet = fleet.clone();
            let report = fleet_core::scheduler::tick(
                &mut fleet,
                black_box(&candidates),
                1.0,
                true,
                &config,
                &mut rng,
            );
            black_box(report)
        })
    });
}

criterion_group!(benches, tick_benchmark);
criterion_main!(benches);
