//! Enumeration types used throughout the subsystem.

use serde::{Deserialize, Serialize};

/// Observable phase of the heat state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatPhase {
    /// Not firing, free to fire.
    #[default]
    Idle,
    /// Firing and accumulating heat.
    Firing,
    /// Tripped at max heat; the cooldown timer is still running.
    Overheated,
    /// Cooldown timer elapsed; waiting for heat to fall to the threshold.
    CoolingDown,
}

/// How pull magnitude depends on distance to the fire point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FalloffMode {
    /// Full strength regardless of distance.
    #[default]
    Constant,
    /// `strength / (distance + 1)`.
    InverseDistance,
}

/// Classification of world entities the weapon can interact with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// Ground enemy.
    Grunt,
    /// Hovering enemy.
    Flyer,
    /// Stationary practice target.
    TrainingDummy,
    /// Loose physics debris.
    Debris,
    /// Flat or thin geometry (signs, plates) poorly captured by volume tests.
    Panel,
}

impl EntityKind {
    /// Whether this kind is an enemy rather than a prop.
    pub fn is_enemy(self) -> bool {
        matches!(
            self,
            EntityKind::Grunt | EntityKind::Flyer | EntityKind::TrainingDummy
        )
    }
}
