//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::BEAM_LENGTH_FACTOR;

/// World-space position (meters). Y is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// The weapon's muzzle for one tick: where pulls converge and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirePoint {
    pub origin: Vec3,
    /// Facing direction. Need not be normalized.
    pub forward: Vec3,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Bit set of interaction layers. An entity is eligible for a query when
/// its collider layers intersect the query mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Straight-line distance to a point.
    pub fn range_to(&self, point: Vec3) -> f32 {
        self.0.distance(point)
    }
}

impl FirePoint {
    pub fn new(origin: Vec3, forward: Vec3) -> Self {
        Self { origin, forward }
    }

    /// Unit facing direction, falling back to +Z when `forward` is degenerate.
    pub fn direction(&self) -> Vec3 {
        self.forward.try_normalize().unwrap_or(Vec3::Z)
    }

    /// Far end of the pull beam visual for a given pull radius.
    pub fn beam_end(&self, pull_radius: f32) -> Vec3 {
        self.origin + self.direction() * pull_radius * BEAM_LENGTH_FACTOR
    }
}

impl Default for FirePoint {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing a single layer index (0..32).
    pub const fn layer(index: u32) -> LayerMask {
        LayerMask(1 << (index & 31))
    }

    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn with(self, other: LayerMask) -> LayerMask {
        LayerMask(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}
