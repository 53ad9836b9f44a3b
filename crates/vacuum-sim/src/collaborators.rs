//! Interfaces the weapon consumes from its host.
//!
//! The world and the effect/audio layer are injected into the controller at
//! construction; nothing here reaches for global state.

use glam::Vec3;
use hecs::Entity;

use vacuum_core::enums::EntityKind;
use vacuum_core::events::EffectCue;
use vacuum_core::types::LayerMask;
use vacuum_core::Vacuumable;

/// World queries and the one mutation (destroy) the weapon performs.
///
/// Any `Entity` may have been removed since it was last seen; every lookup
/// returns `None`/`false` for entities that no longer exist.
pub trait WorldQuery {
    /// Entities whose colliders intersect the sphere, filtered by layer.
    fn overlap_sphere(&self, origin: Vec3, radius: f32, layers: LayerMask) -> Vec<Entity>;

    /// Entities hit by a sphere of `radius` swept from `origin` along
    /// `direction` for `max_distance`, nearest first.
    fn sweep_probe(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
        layers: LayerMask,
    ) -> Vec<Entity>;

    fn contains(&self, entity: Entity) -> bool;

    fn position(&self, entity: Entity) -> Option<Vec3>;

    fn kind(&self, entity: Entity) -> Option<EntityKind>;

    /// The entity's pull behavior, if it has one.
    fn vacuumable(&mut self, entity: Entity) -> Option<&mut dyn Vacuumable>;

    /// Remove the entity from the world. No-op if it is already gone.
    fn destroy(&mut self, entity: Entity);
}

/// Fire-and-forget visual and audio hooks.
pub trait EffectSink {
    fn show_beam(&mut self, origin: Vec3, end: Vec3);

    /// Move a visible beam. Called every firing tick.
    fn aim_beam(&mut self, _origin: Vec3, _end: Vec3) {}

    fn hide_beam(&mut self);

    fn play_loop(&mut self);

    fn stop_loop(&mut self);

    fn play_destruction(&mut self, position: Vec3);
}

/// Stable numeric id for events and snapshots.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Effect sink that records every cue. Used by tools and tests.
#[derive(Debug, Clone, Default)]
pub struct EffectLog {
    cues: Vec<EffectCue>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> &[EffectCue] {
        &self.cues
    }

    /// Number of recorded cues matching `pred`.
    pub fn count(&self, pred: impl Fn(&EffectCue) -> bool) -> usize {
        self.cues.iter().filter(|cue| pred(cue)).count()
    }
}

impl EffectSink for EffectLog {
    fn show_beam(&mut self, origin: Vec3, end: Vec3) {
        self.cues.push(EffectCue::BeamShown { origin, end });
    }

    fn hide_beam(&mut self) {
        self.cues.push(EffectCue::BeamHidden);
    }

    fn play_loop(&mut self) {
        self.cues.push(EffectCue::LoopStarted);
    }

    fn stop_loop(&mut self) {
        self.cues.push(EffectCue::LoopStopped);
    }

    fn play_destruction(&mut self, position: Vec3) {
        self.cues.push(EffectCue::DestructionPlayed { position });
    }
}
