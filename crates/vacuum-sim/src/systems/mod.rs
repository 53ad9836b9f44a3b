//! Weapon subsystems, run by `WeaponController` in a fixed order each tick.
//!
//! Each subsystem holds only its own state and reaches the world through the
//! `WorldQuery` collaborator passed in by the controller.

pub mod destruction;
pub mod detection;
pub mod force;
pub mod heat;
pub mod residency;
