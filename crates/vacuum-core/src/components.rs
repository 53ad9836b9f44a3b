//! ECS components for entities the weapon can interact with.
//!
//! Components are plain data. `RigidBody` carries the small amount of
//! integration logic a host needs to move pulled bodies.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BODY_MASS, DEFAULT_COLLIDER_RADIUS, DEFAULT_LINEAR_DAMPING};
use crate::types::LayerMask;
use crate::vacuumable::Vacuumable;

/// Sphere collider used by overlap and probe queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
    /// Layers this collider belongs to.
    pub layers: LayerMask,
}

/// Point-mass body. Forces accumulate between integration steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub mass: f32,
    pub velocity: Vec3,
    /// Fraction of velocity shed per second.
    pub linear_damping: f32,
    /// Force accumulated since the last step.
    pub pending_force: Vec3,
}

/// The entity's pull behavior. Boxed so variants can live side by side.
pub struct Pullable(pub Box<dyn Vacuumable>);

impl Collider {
    pub fn new(radius: f32, layers: LayerMask) -> Self {
        Self { radius, layers }
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::new(DEFAULT_COLLIDER_RADIUS, LayerMask::ALL)
    }
}

impl RigidBody {
    pub fn new(mass: f32, linear_damping: f32) -> Self {
        Self {
            mass,
            velocity: Vec3::ZERO,
            linear_damping,
            pending_force: Vec3::ZERO,
        }
    }

    pub fn add_force(&mut self, force: Vec3) {
        self.pending_force += force;
    }

    /// Integrate one step and return the displacement to apply to the position.
    pub fn step(&mut self, dt: f32) -> Vec3 {
        if self.mass > 0.0 {
            self.velocity += self.pending_force / self.mass * dt;
        }
        self.pending_force = Vec3::ZERO;
        let keep = (1.0 - self.linear_damping * dt).max(0.0);
        self.velocity *= keep;
        self.velocity * dt
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(DEFAULT_BODY_MASS, DEFAULT_LINEAR_DAMPING)
    }
}

impl std::fmt::Debug for Pullable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pullable")
            .field("can_be_vacuumed", &self.0.can_be_vacuumed())
            .field("resistance", &self.0.resistance())
            .finish()
    }
}
