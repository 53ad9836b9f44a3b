//! Events emitted by the weapon for gameplay, audio, and UI feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// Weapon lifecycle events, drained into each tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WeaponEvent {
    FiringStarted,
    FiringStopped,
    /// Heat hit the ceiling while firing.
    Overheated { at_secs: f64 },
    /// The post-overheat timer ran out; heat may still be too high.
    CooldownElapsed,
    /// Both cooldown gates cleared; firing is allowed again.
    Recovered,
    PullStarted { entity: u64 },
    PullEnded { entity: u64 },
    /// A resident vanished from the world and was dropped silently.
    StalePruned { entity: u64 },
    Destroyed {
        entity: u64,
        kind: Option<EntityKind>,
        position: Vec3,
    },
}

/// A request made of the effect/audio collaborator, as recorded by `EffectLog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectCue {
    BeamShown { origin: Vec3, end: Vec3 },
    BeamHidden,
    LoopStarted,
    LoopStopped,
    DestructionPlayed { position: Vec3 },
}
