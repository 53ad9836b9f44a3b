//! The capability contract for anything the weapon can pull.

use glam::Vec3;

use crate::components::RigidBody;

/// Something in the world that can be pulled by the vacuum weapon.
///
/// Variant behavior (enemy archetypes, props) lives in separate implementing
/// types. The weapon never owns an implementor; it borrows one through the
/// world collaborator for the duration of a single call.
pub trait Vacuumable: Send + Sync {
    /// Whether the entity currently accepts being pulled at all.
    fn can_be_vacuumed(&self) -> bool;

    /// Resistance coefficient in `[0, 1]`. 0 = no resistance, 1 = immune.
    fn resistance(&self) -> f32;

    /// The entity entered the weapon's affected set.
    fn on_pull_start(&mut self);

    /// The entity left the affected set while still alive.
    fn on_pull_end(&mut self);

    /// Pull applied this tick. `direction` is a unit vector toward the fire
    /// point and `magnitude` is already scaled by `1 - resistance`.
    fn on_pull_force(&mut self, direction: Vec3, magnitude: f32);

    /// Physics body the host integrates, if the implementor has one.
    fn body_mut(&mut self) -> Option<&mut RigidBody> {
        None
    }
}

/// `1 - resistance`, with the coefficient clamped to `[0, 1]`.
/// A NaN coefficient is treated as fully immune (0.0).
pub fn effective_resistance(resistance: f32) -> f32 {
    if resistance.is_nan() {
        return 0.0;
    }
    1.0 - resistance.clamp(0.0, 1.0)
}
