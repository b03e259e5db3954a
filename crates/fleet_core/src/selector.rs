//! Work candidate selection.
//!
//! Given a robot and the terrain collaborator's candidate snapshot, pick
//! the patch most in need of that robot's kind of service, or none.
//! Candidates are re-evaluated every tick; there is no reservation or
//! locking between robots.

use crate::equipment::RobotKind;
use crate::robot::RobotUnit;
use crate::terrain::WorkCandidate;

/// Mowers service patches whose average health is below this.
pub const MOWER_HEALTH_THRESHOLD: f32 = 70.0;
/// Sprayers service patches whose average moisture is below this.
pub const SPRAYER_MOISTURE_THRESHOLD: f32 = 30.0;
/// Spreaders service patches whose average nutrients are below this.
pub const SPREADER_NUTRIENT_THRESHOLD: f32 = 30.0;

/// Whether a patch needs service from the given machine family.
#[must_use]
pub fn needs_service(kind: RobotKind, candidate: &WorkCandidate) -> bool {
    match kind {
        RobotKind::Mower => candidate.avg_health < MOWER_HEALTH_THRESHOLD,
        RobotKind::Sprayer => candidate.avg_moisture < SPRAYER_MOISTURE_THRESHOLD,
        RobotKind::Spreader => candidate.avg_nutrients < SPREADER_NUTRIENT_THRESHOLD,
    }
}

/// The metric the selector minimizes: lower means more urgent.
fn urgency(kind: RobotKind, candidate: &WorkCandidate) -> f32 {
    match kind {
        RobotKind::Mower => candidate.avg_health,
        RobotKind::Sprayer => candidate.avg_moisture,
        RobotKind::Spreader => candidate.avg_nutrients,
    }
}

/// Pick the best next work target for `robot`, or `None`.
///
/// Filters: walkable surface, the kind-specific need predicate, and
/// Euclidean distance within `max_distance` of the robot. Among the
/// survivors the most urgent patch wins; ties break toward the nearest.
#[must_use]
pub fn select_work<'a>(
    robot: &RobotUnit,
    candidates: &'a [WorkCandidate],
    max_distance: f32,
) -> Option<&'a WorkCandidate> {
    let max_distance_sq = max_distance * max_distance;
    candidates
        .iter()
        .filter(|c| c.surface.is_walkable())
        .filter(|c| needs_service(robot.kind, c))
        .filter(|c| robot.position.distance_squared(c.position) <= max_distance_sq)
        .min_by(|a, b| {
            urgency(robot.kind, a)
                .total_cmp(&urgency(robot.kind, b))
                .then_with(|| {
                    robot
                        .position
                        .distance_squared(a.position)
                        .total_cmp(&robot.position.distance_squared(b.position))
                })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipmentSpec, RobotStats};
    use crate::math::Vec2;
    use crate::terrain::SurfaceKind;

    fn robot(equipment_id: &str, position: Vec2) -> RobotUnit {
        RobotUnit::new(
            format!("{equipment_id}_1"),
            equipment_id.to_string(),
            RobotStats::freeze(&EquipmentSpec::default()),
            position,
        )
    }

    fn patch(x: f32, z: f32, health: f32, moisture: f32, nutrients: f32) -> WorkCandidate {
        WorkCandidate {
            position: Vec2::new(x, z),
            avg_health: health,
            avg_moisture: moisture,
            avg_nutrients: nutrients,
            surface: SurfaceKind::Fairway,
            cell_count: 1,
        }
    }

    #[test]
    fn test_mower_targets_low_health() {
        let mower = robot("robot_mower_fairway", Vec2::ZERO);
        let candidates = vec![patch(1.0, 0.0, 90.0, 10.0, 10.0), patch(2.0, 0.0, 50.0, 90.0, 90.0)];
        let picked = select_work(&mower, &candidates, 50.0).unwrap();
        assert_eq!(picked.avg_health, 50.0);
    }

    #[test]
    fn test_sprayer_targets_low_moisture() {
        let sprayer = robot("robot_sprayer_rough", Vec2::ZERO);
        let candidates = vec![patch(1.0, 0.0, 40.0, 80.0, 10.0), patch(2.0, 0.0, 90.0, 20.0, 90.0)];
        let picked = select_work(&sprayer, &candidates, 50.0).unwrap();
        assert_eq!(picked.avg_moisture, 20.0);
    }

    #[test]
    fn test_spreader_targets_low_nutrients() {
        let spreader = robot("robot_fertilizer_cart", Vec2::ZERO);
        let candidates = vec![patch(1.0, 0.0, 40.0, 10.0, 80.0), patch(2.0, 0.0, 90.0, 90.0, 15.0)];
        let picked = select_work(&spreader, &candidates, 50.0).unwrap();
        assert_eq!(picked.avg_nutrients, 15.0);
    }

    #[test]
    fn test_healthy_course_yields_no_work() {
        let mower = robot("robot_mower_fairway", Vec2::ZERO);
        let candidates = vec![patch(1.0, 0.0, 100.0, 100.0, 100.0)];
        assert!(select_work(&mower, &candidates, 50.0).is_none());
    }

    #[test]
    fn test_water_patches_are_excluded() {
        let mower = robot("robot_mower_fairway", Vec2::ZERO);
        let mut lake = patch(1.0, 0.0, 5.0, 5.0, 5.0);
        lake.surface = SurfaceKind::Water;
        assert!(select_work(&mower, &[lake], 50.0).is_none());
    }

    #[test]
    fn test_out_of_radius_candidates_are_excluded() {
        let mower = robot("robot_mower_fairway", Vec2::ZERO);
        let candidates = vec![patch(100.0, 0.0, 5.0, 5.0, 5.0)];
        assert!(select_work(&mower, &candidates, 50.0).is_none());
        assert!(select_work(&mower, &candidates, 200.0).is_some());
    }

    #[test]
    fn test_most_urgent_wins_over_nearest() {
        let mower = robot("robot_mower_fairway", Vec2::ZERO);
        let candidates = [
            patch(1.0, 0.0, 60.0, 0.0, 0.0),
            patch(30.0, 0.0, 20.0, 0.0, 0.0),
        ];
        let picked = select_work(&mower, &candidates, 50.0).unwrap();
        assert_eq!(picked.avg_health, 20.0);
    }

    #[test]
    fn test_urgency_tie_breaks_toward_nearest() {
        let mower = robot("robot_mower_fairway", Vec2::ZERO);
        let candidates = [
            patch(30.0, 0.0, 40.0, 0.0, 0.0),
            patch(3.0, 0.0, 40.0, 0.0, 0.0),
        ];
        let picked = select_work(&mower, &candidates, 50.0).unwrap();
        assert_eq!(picked.position, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // A patch exactly at the threshold does not need service.
        let mower = robot("robot_mower_fairway", Vec2::ZERO);
        let candidates = vec![patch(1.0, 0.0, MOWER_HEALTH_THRESHOLD, 0.0, 0.0)];
        assert!(select_work(&mower, &candidates, 50.0).is_none());
    }
}
