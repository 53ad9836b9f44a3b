//! Pullable entity behaviors for the vacuum weapon.
//!
//! Archetype-driven enemies and physics props, each a separate
//! implementation of [`vacuum_core::Vacuumable`].

pub mod enemy;
pub mod profiles;
pub mod prop;
pub mod telemetry;

pub use vacuum_core as core;

pub use enemy::Enemy;
pub use profiles::{get_profile, EnemyArchetype, EnemyProfile};
pub use prop::Prop;
pub use telemetry::{PullLog, PullTelemetry};
