//! Physics props: loose debris and thin panels.
//!
//! Props are pulled like enemies but are usually left out of the weapon's
//! destruction filter, so they get dragged around without being consumed.

use glam::Vec3;

use vacuum_core::components::RigidBody;
use vacuum_core::constants::{DEFAULT_BODY_MASS, DEFAULT_LINEAR_DAMPING};
use vacuum_core::enums::EntityKind;
use vacuum_core::Vacuumable;

use crate::telemetry::PullTelemetry;

#[derive(Debug, Clone)]
pub struct Prop {
    kind: EntityKind,
    resistance: f32,
    /// Bolted props refuse to be vacuumed.
    bolted: bool,
    body: RigidBody,
    telemetry: PullTelemetry,
}

impl Prop {
    pub fn new(kind: EntityKind, resistance: f32) -> Self {
        Self {
            kind,
            resistance,
            bolted: false,
            body: RigidBody::new(DEFAULT_BODY_MASS, DEFAULT_LINEAR_DAMPING),
            telemetry: PullTelemetry::new(),
        }
    }

    pub fn debris() -> Self {
        Self::new(EntityKind::Debris, 0.0)
    }

    pub fn panel() -> Self {
        Self::new(EntityKind::Panel, 0.5)
    }

    pub fn bolted(mut self) -> Self {
        self.bolted = true;
        self
    }

    pub fn with_telemetry(mut self, telemetry: PullTelemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn telemetry(&self) -> &PullTelemetry {
        &self.telemetry
    }
}

impl Vacuumable for Prop {
    fn can_be_vacuumed(&self) -> bool {
        !self.bolted
    }

    fn resistance(&self) -> f32 {
        self.resistance
    }

    fn on_pull_start(&mut self) {
        self.telemetry.record_start();
    }

    fn on_pull_end(&mut self) {
        self.telemetry.record_end();
    }

    fn on_pull_force(&mut self, direction: Vec3, magnitude: f32) {
        self.body.add_force(direction * magnitude);
        self.telemetry.record_force(direction, magnitude);
    }

    fn body_mut(&mut self) -> Option<&mut RigidBody> {
        Some(&mut self.body)
    }
}
