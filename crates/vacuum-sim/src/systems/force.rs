//! Pull forces on residents.

use glam::Vec3;
use hecs::Entity;

use vacuum_core::enums::FalloffMode;
use vacuum_core::vacuumable::effective_resistance;
use vacuum_core::WeaponConfig;

use crate::collaborators::WorldQuery;

/// Raw pull magnitude at `distance` before resistance.
///
/// `InverseDistance` is `strength / (distance + 1)`: full strength at the
/// origin, never dividing by zero.
pub fn pull_magnitude(mode: FalloffMode, strength: f32, distance: f32) -> f32 {
    match mode {
        FalloffMode::Constant => strength,
        FalloffMode::InverseDistance => strength / (distance.max(0.0) + 1.0),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ForceApplier {
    mode: FalloffMode,
    strength: f32,
}

impl ForceApplier {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            mode: config.falloff,
            strength: config.pull_strength,
        }
    }

    /// Final magnitude for a resident at `distance` with `resistance`.
    pub fn magnitude_for(&self, distance: f32, resistance: f32) -> f32 {
        pull_magnitude(self.mode, self.strength, distance) * effective_resistance(resistance)
    }

    /// Push one force toward `origin` on each live resident. Residents
    /// sitting exactly on the origin have no direction and are skipped.
    /// Returns how many were pulled.
    pub fn apply<W: WorldQuery + ?Sized>(&self, world: &mut W, residents: &[Entity], origin: Vec3) -> usize {
        let mut applied = 0;
        for &entity in residents {
            let Some(position) = world.position(entity) else {
                continue;
            };
            let offset = origin - position;
            let Some(direction) = offset.try_normalize() else {
                continue;
            };
            let distance = offset.length();
            let Some(behavior) = world.vacuumable(entity) else {
                continue;
            };
            let magnitude = self.magnitude_for(distance, behavior.resistance());
            behavior.on_pull_force(direction, magnitude);
            applied += 1;
        }
        applied
    }
}
