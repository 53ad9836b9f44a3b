//! Vacuum weapon simulation.
//!
//! `WeaponController` runs the per-tick pipeline (heat, scan, residency,
//! force, destruction) against a world collaborator. `Scene` is an
//! hecs-backed world that implements the collaborator for tests and tools.

pub mod collaborators;
pub mod controller;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use vacuum_core as core;
pub use collaborators::{entity_id, EffectLog, EffectSink, WorldQuery};
pub use controller::WeaponController;
pub use scene::Scene;
