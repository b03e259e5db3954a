//! The tick scheduler: advances every robot one simulated time-step.
//!
//! One `tick` call processes the whole fleet to completion, single
//! threaded, with no IO and no callbacks into collaborators. Robots are
//! processed independently; the only stochastic input is the breakdown
//! roll, driven by a caller-supplied RNG so tests can replay exactly.

use rand::Rng;

use crate::fleet::FleetState;
use crate::math::Vec2;
use crate::robot::{Destination, NavTarget, RobotState, RobotUnit};
use crate::selector::select_work;
use crate::terrain::{TerrainEffect, WorkCandidate};

/// Tunable constants for the tick scheduler.
///
/// These are deliberately configuration, not magic numbers: the host
/// simulation can adjust them without touching the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickConfig {
    /// Resource fraction below which an idle robot heads for the
    /// charging station.
    pub low_resource_fraction: f32,
    /// Resource units restored per minute while charging.
    pub charge_rate_per_minute: f32,
    /// Resource fraction at which a charging robot undocks.
    pub charge_complete_fraction: f32,
    /// Passive resource drain per minute, multiplied by the robot's
    /// fuel efficiency.
    pub decay_per_minute: f32,
    /// Work search radius in world units (Euclidean).
    pub max_work_distance: f32,
    /// Distance within which a moving robot snaps to its target.
    pub arrival_epsilon: f32,
    /// Multiplier on breakdown probability while the fleet-AI upgrade
    /// is active.
    pub fleet_ai_breakdown_factor: f32,
    /// Terrain effect magnitude per unit of robot efficiency.
    pub effect_magnitude_scale: f32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            low_resource_fraction: 0.15,
            charge_rate_per_minute: 5.0,
            charge_complete_fraction: 0.9,
            decay_per_minute: 0.5,
            max_work_distance: 50.0,
            arrival_epsilon: 0.5,
            fleet_ai_breakdown_factor: 0.5,
            effect_magnitude_scale: 10.0,
        }
    }
}

/// Everything a tick hands back to the host simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Terrain effects emitted this tick, for the terrain collaborator
    /// to apply. Empty when no robot arrived at a work site.
    pub effects: Vec<TerrainEffect>,
    /// Aggregate operating cost for the tick, for the economy ledger.
    pub operating_cost: f32,
}

/// Advance the whole fleet by `delta_minutes` of simulated time.
///
/// `candidates` is the terrain collaborator's snapshot for this tick and
/// is never mutated. `fleet_ai_active` halves breakdown probability
/// (see [`TickConfig::fleet_ai_breakdown_factor`]). The RNG drives only
/// breakdown rolls; seed it for deterministic replays.
///
/// A non-positive `delta_minutes` is a no-op returning an empty report;
/// negative values are a caller contract violation and assert in debug
/// builds.
pub fn tick<R: Rng + ?Sized>(
    fleet: &mut FleetState,
    candidates: &[WorkCandidate],
    delta_minutes: f32,
    fleet_ai_active: bool,
    config: &TickConfig,
    rng: &mut R,
) -> TickReport {
    debug_assert!(
        delta_minutes >= 0.0,
        "tick called with negative delta_minutes"
    );
    if delta_minutes <= 0.0 {
        return TickReport::default();
    }

    let station = fleet.charging_station;
    let mut report = TickReport::default();
    for robot in &mut fleet.robots {
        step_robot(
            robot,
            station,
            candidates,
            delta_minutes,
            fleet_ai_active,
            config,
            rng,
            &mut report,
        );
    }

    tracing::debug!(
        robots = fleet.robots.len(),
        effects = report.effects.len(),
        operating_cost = report.operating_cost,
        delta_minutes,
        "fleet tick complete"
    );
    report
}

/// Advance a single robot. Independent of every other robot in the
/// fleet; cross-robot coordination is deliberately absent.
#[allow(clippy::too_many_arguments)]
fn step_robot<R: Rng + ?Sized>(
    robot: &mut RobotUnit,
    station: Vec2,
    candidates: &[WorkCandidate],
    delta_minutes: f32,
    fleet_ai_active: bool,
    config: &TickConfig,
    rng: &mut R,
    report: &mut TickReport,
) {
    // Cross-cutting eligibility (decay, breakdown) keys off the state
    // the robot entered the tick in, so a robot that finishes charging
    // or repair this tick is not also drained or re-rolled.
    let entry_state = robot.state;

    match robot.state {
        RobotState::Idle => {
            if robot.resource_fraction() < config.low_resource_fraction {
                robot.target = Some(NavTarget {
                    position: station,
                    destination: Destination::ChargingStation,
                });
                robot.state = RobotState::Moving;
            } else if let Some(candidate) =
                select_work(robot, candidates, config.max_work_distance)
            {
                robot.target = Some(NavTarget {
                    position: candidate.position,
                    destination: Destination::WorkSite,
                });
                robot.state = RobotState::Moving;
            }
        }
        RobotState::Moving => {
            if let Some(target) = robot.target {
                let step = robot.stats.speed * delta_minutes;
                let next = robot.position.step_toward(target.position, step);
                if next.distance(target.position) <= config.arrival_epsilon {
                    robot.position = target.position;
                    match target.destination {
                        // The work pulse below fires in this same tick.
                        Destination::WorkSite => robot.state = RobotState::Working,
                        Destination::ChargingStation => {
                            robot.state = RobotState::Charging;
                            robot.target = None;
                        }
                    }
                } else {
                    robot.position = next;
                }
            } else {
                // Moving with no target is unreachable through the
                // public API; recover rather than panic.
                robot.state = RobotState::Idle;
            }
        }
        RobotState::Working | RobotState::Charging | RobotState::Broken => {}
    }

    if robot.state == RobotState::Charging && entry_state == RobotState::Charging {
        robot.resource_current = (robot.resource_current
            + config.charge_rate_per_minute * delta_minutes)
            .min(robot.resource_max);
        if robot.resource_current >= config.charge_complete_fraction * robot.resource_max {
            robot.state = RobotState::Idle;
        }
    }

    if robot.state == RobotState::Broken {
        robot.breakdown_minutes_remaining =
            (robot.breakdown_minutes_remaining - delta_minutes).max(0.0);
        if robot.breakdown_minutes_remaining <= 0.0 {
            robot.state = RobotState::Idle;
        }
    }

    // Work pulse: one effect per arrival, then straight back to idle.
    // This is the only channel through which the fleet touches terrain.
    if robot.state == RobotState::Working {
        let site = robot.target.map_or(robot.position, |t| t.position);
        report.effects.push(TerrainEffect {
            kind: robot.kind,
            position: site,
            magnitude: robot.stats.efficiency * config.effect_magnitude_scale,
        });
        robot.state = RobotState::Idle;
        robot.target = None;
    }

    // Passive resource drain for robots that were running this tick.
    if !matches!(entry_state, RobotState::Charging | RobotState::Broken) {
        robot.resource_current = (robot.resource_current
            - robot.stats.fuel_efficiency * delta_minutes * config.decay_per_minute)
            .max(0.0);
    }

    // Breakdown roll, overriding whatever the state machine chose.
    if !matches!(entry_state, RobotState::Broken | RobotState::Charging) {
        let mut probability = robot.stats.breakdown_rate * (delta_minutes / 60.0);
        if fleet_ai_active {
            probability *= config.fleet_ai_breakdown_factor;
        }
        let probability = probability.clamp(0.0, 1.0);
        if probability > 0.0 && rng.gen::<f32>() < probability {
            robot.state = RobotState::Broken;
            robot.breakdown_minutes_remaining = robot.stats.repair_time_minutes;
            robot.target = None;
            tracing::debug!(robot = %robot.id, repair_minutes = robot.stats.repair_time_minutes, "robot broke down");
        }
    }

    report.operating_cost += robot.stats.operating_cost_per_hour * (delta_minutes / 60.0);
}
