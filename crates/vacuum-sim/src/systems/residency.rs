//! Residency tracking: which entities are currently being pulled.
//!
//! Every entity that gets `on_pull_start` gets exactly one matching
//! `on_pull_end`, except when it leaves by destruction or by vanishing from
//! the world, in which case it is dropped without a callback.

use hecs::Entity;
use tracing::debug;

use vacuum_core::events::WeaponEvent;

use crate::collaborators::{entity_id, WorldQuery};

/// Entities that entered and left the affected set in one reconcile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidencyDiff {
    pub entered: Vec<Entity>,
    pub exited: Vec<Entity>,
}

#[derive(Debug, Clone, Default)]
pub struct ResidencyTracker {
    residents: Vec<Entity>,
}

impl ResidencyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop residents the world no longer holds. No callbacks.
    pub fn prune_stale<W: WorldQuery + ?Sized>(&mut self, world: &W, events: &mut Vec<WeaponEvent>) {
        self.residents.retain(|&entity| {
            if world.contains(entity) {
                return true;
            }
            debug!(entity = entity_id(entity), "resident vanished, pruned");
            events.push(WeaponEvent::StalePruned {
                entity: entity_id(entity),
            });
            false
        });
    }

    /// Replace the resident set with `detected`, firing start/end callbacks
    /// on the difference.
    pub fn reconcile<W: WorldQuery + ?Sized>(
        &mut self,
        detected: &[Entity],
        world: &mut W,
        events: &mut Vec<WeaponEvent>,
    ) -> ResidencyDiff {
        let mut diff = ResidencyDiff::default();

        for &entity in &self.residents {
            if detected.contains(&entity) {
                continue;
            }
            if let Some(behavior) = world.vacuumable(entity) {
                behavior.on_pull_end();
                events.push(WeaponEvent::PullEnded {
                    entity: entity_id(entity),
                });
            }
            diff.exited.push(entity);
        }

        for &entity in detected {
            if self.residents.contains(&entity) {
                continue;
            }
            if let Some(behavior) = world.vacuumable(entity) {
                behavior.on_pull_start();
                events.push(WeaponEvent::PullStarted {
                    entity: entity_id(entity),
                });
            }
            diff.entered.push(entity);
        }

        self.residents = detected.to_vec();
        diff
    }

    /// End the pull on every live resident and clear the set.
    pub fn release_all<W: WorldQuery + ?Sized>(&mut self, world: &mut W, events: &mut Vec<WeaponEvent>) {
        for entity in self.residents.drain(..) {
            if let Some(behavior) = world.vacuumable(entity) {
                behavior.on_pull_end();
                events.push(WeaponEvent::PullEnded {
                    entity: entity_id(entity),
                });
            }
        }
    }

    /// Remove without any callback. Used for destroyed entities.
    pub fn forget(&mut self, entity: Entity) -> bool {
        let before = self.residents.len();
        self.residents.retain(|&e| e != entity);
        self.residents.len() != before
    }

    pub fn residents(&self) -> &[Entity] {
        &self.residents
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Drop all residents without callbacks.
    pub fn clear(&mut self) {
        self.residents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use glam::Vec3;
    use vacuum_core::components::Collider;
    use vacuum_core::enums::EntityKind;
    use vacuum_enemies::{Enemy, PullTelemetry};

    fn spawn_tracked(scene: &mut Scene, x: f32) -> (Entity, PullTelemetry) {
        let telemetry = PullTelemetry::new();
        let enemy = Enemy::grunt().with_telemetry(telemetry.clone());
        let entity = scene.spawn(
            Vec3::new(x, 0.0, 0.0),
            EntityKind::Grunt,
            Collider::default(),
            enemy,
        );
        (entity, telemetry)
    }

    #[test]
    fn test_reconcile_diffs_sets() {
        let mut scene = Scene::default();
        let (a, ta) = spawn_tracked(&mut scene, 1.0);
        let (b, tb) = spawn_tracked(&mut scene, 2.0);
        let mut tracker = ResidencyTracker::new();
        let mut events = Vec::new();

        let diff = tracker.reconcile(&[a], &mut scene, &mut events);
        assert_eq!(diff.entered, vec![a]);
        assert!(diff.exited.is_empty());

        let diff = tracker.reconcile(&[a, b], &mut scene, &mut events);
        assert_eq!(diff.entered, vec![b]);

        let diff = tracker.reconcile(&[b], &mut scene, &mut events);
        assert_eq!(diff.exited, vec![a]);
        assert_eq!(tracker.residents(), &[b]);

        assert_eq!(ta.snapshot().starts, 1);
        assert_eq!(ta.snapshot().ends, 1);
        assert_eq!(tb.snapshot().starts, 1);
        assert_eq!(tb.snapshot().ends, 0);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_prune_is_silent() {
        let mut scene = Scene::default();
        let (a, ta) = spawn_tracked(&mut scene, 1.0);
        let mut tracker = ResidencyTracker::new();
        let mut events = Vec::new();
        tracker.reconcile(&[a], &mut scene, &mut events);

        assert!(scene.despawn(a));
        events.clear();
        tracker.prune_stale(&scene, &mut events);

        assert!(tracker.is_empty());
        assert_eq!(ta.snapshot().ends, 0);
        assert_eq!(
            events,
            vec![WeaponEvent::StalePruned {
                entity: entity_id(a)
            }]
        );
    }

    #[test]
    fn test_release_all_ends_each_resident_once() {
        let mut scene = Scene::default();
        let (a, ta) = spawn_tracked(&mut scene, 1.0);
        let (b, tb) = spawn_tracked(&mut scene, 2.0);
        let mut tracker = ResidencyTracker::new();
        let mut events = Vec::new();
        tracker.reconcile(&[a, b], &mut scene, &mut events);

        tracker.release_all(&mut scene, &mut events);
        tracker.release_all(&mut scene, &mut events);

        assert!(tracker.is_empty());
        assert!(ta.is_balanced());
        assert!(tb.is_balanced());
        assert_eq!(ta.snapshot().ends, 1);
    }

    #[test]
    fn test_forget_skips_callback() {
        let mut scene = Scene::default();
        let (a, ta) = spawn_tracked(&mut scene, 1.0);
        let mut tracker = ResidencyTracker::new();
        let mut events = Vec::new();
        tracker.reconcile(&[a], &mut scene, &mut events);

        assert!(tracker.forget(a));
        assert!(!tracker.forget(a));
        tracker.release_all(&mut scene, &mut events);
        assert_eq!(ta.snapshot().ends, 0);
    }
}
