//! Archetype-driven enemies.

use glam::Vec3;
use tracing::debug;

use vacuum_core::components::RigidBody;
use vacuum_core::Vacuumable;

use crate::profiles::{get_profile, EnemyArchetype, EnemyProfile};
use crate::telemetry::PullTelemetry;

/// An enemy that can be pulled. Pull force feeds its rigid body; resistance
/// comes from the archetype profile.
#[derive(Debug, Clone)]
pub struct Enemy {
    archetype: EnemyArchetype,
    profile: EnemyProfile,
    body: RigidBody,
    /// Cleared while the enemy is shielded or otherwise immune.
    vacuumable: bool,
    captured: bool,
    telemetry: PullTelemetry,
}

impl Enemy {
    pub fn new(archetype: EnemyArchetype) -> Self {
        let profile = get_profile(archetype);
        Self {
            archetype,
            profile,
            body: RigidBody::new(profile.mass, profile.linear_damping),
            vacuumable: true,
            captured: false,
            telemetry: PullTelemetry::new(),
        }
    }

    pub fn grunt() -> Self {
        Self::new(EnemyArchetype::Grunt)
    }

    pub fn flyer() -> Self {
        Self::new(EnemyArchetype::Flyer)
    }

    pub fn training_dummy() -> Self {
        Self::new(EnemyArchetype::TrainingDummy)
    }

    /// Record callbacks into a caller-held handle.
    pub fn with_telemetry(mut self, telemetry: PullTelemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Override the archetype's resistance.
    pub fn with_resistance(mut self, resistance: f32) -> Self {
        self.profile.resistance = resistance;
        self
    }

    pub fn set_vacuumable(&mut self, vacuumable: bool) {
        self.vacuumable = vacuumable;
    }

    pub fn archetype(&self) -> EnemyArchetype {
        self.archetype
    }

    pub fn profile(&self) -> &EnemyProfile {
        &self.profile
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn telemetry(&self) -> &PullTelemetry {
        &self.telemetry
    }
}

impl Vacuumable for Enemy {
    fn can_be_vacuumed(&self) -> bool {
        self.vacuumable
    }

    fn resistance(&self) -> f32 {
        self.profile.resistance
    }

    fn on_pull_start(&mut self) {
        self.captured = true;
        self.telemetry.record_start();
        debug!(archetype = ?self.archetype, "enemy caught in pull");
    }

    fn on_pull_end(&mut self) {
        self.captured = false;
        self.telemetry.record_end();
        debug!(archetype = ?self.archetype, "enemy released");
    }

    fn on_pull_force(&mut self, direction: Vec3, magnitude: f32) {
        self.body.add_force(direction * magnitude);
        self.telemetry.record_force(direction, magnitude);
    }

    fn body_mut(&mut self) -> Option<&mut RigidBody> {
        Some(&mut self.body)
    }
}
