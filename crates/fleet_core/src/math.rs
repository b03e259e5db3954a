//! 2D math utilities for the course ground plane.
//!
//! Positions live on the terrain's x/z plane, matching the coordinate
//! space the renderer and terrain collaborator use. All movement is
//! straight-line interpolation, so a small vector type is all we need.

use serde::{Deserialize, Serialize};

/// A point or displacement on the course ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// East-west coordinate.
    pub x: f32,
    /// North-south coordinate.
    pub z: f32,
}

impl Vec2 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Zero vector.
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    /// Squared Euclidean distance (avoids sqrt for comparisons).
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Manhattan distance (grid-walk metric, kept for callers that
    /// match a terrain collaborator using cell distances).
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> f32 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }

    /// Vector length.
    #[must_use]
    pub fn length(self) -> f32 {
        self.distance(Self::ZERO)
    }

    /// Move from `self` toward `target` by at most `step`, without
    /// overshooting. Returns `target` when the remaining distance is
    /// within `step`.
    #[must_use]
    pub fn step_toward(self, target: Self, step: f32) -> Self {
        let remaining = self.distance(target);
        if remaining <= step || remaining <= f32::EPSILON {
            return target;
        }
        let t = step / remaining;
        Self {
            x: self.x + (target.x - self.x) * t,
            z: self.z + (target.z - self.z) * t,
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            z: self.z + rhs.z,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            z: self.z - rhs.z,
        }
    }
}
