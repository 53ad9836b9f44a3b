//! Archetype-specific enemy profiles.
//!
//! Consolidates per-archetype parameters so enemy behavior stays data-driven.

use vacuum_core::enums::EntityKind;

/// Enemy archetypes the weapon can pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyArchetype {
    Grunt,
    Flyer,
    TrainingDummy,
}

/// Behavioral profile for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Vacuum resistance in [0, 1].
    pub resistance: f32,
    /// Body mass (kg).
    pub mass: f32,
    /// Linear damping (per second).
    pub linear_damping: f32,
    /// Own locomotion speed (m/s).
    pub move_speed: f32,
    /// Damage dealt on contact.
    pub contact_damage: f32,
    /// Collider radius (m).
    pub collider_radius: f32,
}

impl EnemyArchetype {
    pub fn kind(self) -> EntityKind {
        match self {
            EnemyArchetype::Grunt => EntityKind::Grunt,
            EnemyArchetype::Flyer => EntityKind::Flyer,
            EnemyArchetype::TrainingDummy => EntityKind::TrainingDummy,
        }
    }
}

/// Get the profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyProfile {
    use vacuum_core::constants::*;

    match archetype {
        EnemyArchetype::Grunt => EnemyProfile {
            resistance: 0.2,
            mass: DEFAULT_BODY_MASS,
            linear_damping: DEFAULT_LINEAR_DAMPING,
            move_speed: 3.0,
            contact_damage: 5.0,
            collider_radius: DEFAULT_COLLIDER_RADIUS,
        },
        EnemyArchetype::Flyer => EnemyProfile {
            resistance: 0.2,
            mass: 0.6,
            linear_damping: DEFAULT_LINEAR_DAMPING,
            move_speed: 5.0,
            contact_damage: 10.0,
            collider_radius: 0.4,
        },
        EnemyArchetype::TrainingDummy => EnemyProfile {
            resistance: 0.3,
            mass: DEFAULT_BODY_MASS,
            linear_damping: 0.0, // pulled in quickly, nothing bleeds speed off
            move_speed: 0.0,
            contact_damage: 0.0,
            collider_radius: DEFAULT_COLLIDER_RADIUS,
        },
    }
}
