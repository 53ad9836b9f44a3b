//! Destruction of residents that reach the fire point.

use glam::Vec3;
use hecs::Entity;
use tracing::info;

use vacuum_core::enums::EntityKind;
use vacuum_core::events::WeaponEvent;
use vacuum_core::WeaponConfig;

use crate::collaborators::{entity_id, EffectSink, WorldQuery};
use crate::systems::residency::ResidencyTracker;

#[derive(Debug, Clone)]
pub struct DestructionPolicy {
    distance: f32,
    /// `None` destroys every kind.
    kinds: Option<Vec<EntityKind>>,
}

impl DestructionPolicy {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            distance: config.destruction_distance,
            kinds: config.destroy_kinds.clone(),
        }
    }

    /// Within reach (inclusive) and, if filtered, of an allowed kind.
    /// Entities with no kind never pass a filter.
    pub fn should_destroy(&self, distance: f32, kind: Option<EntityKind>) -> bool {
        if distance > self.distance {
            return false;
        }
        match (&self.kinds, kind) {
            (None, _) => true,
            (Some(kinds), Some(kind)) => kinds.contains(&kind),
            (Some(_), None) => false,
        }
    }

    /// Destroy every resident within reach. Destroyed entities leave the
    /// resident set with no `on_pull_end`.
    pub fn run<W, E>(
        &self,
        world: &mut W,
        residency: &mut ResidencyTracker,
        origin: Vec3,
        effects: &mut E,
        events: &mut Vec<WeaponEvent>,
    ) -> Vec<Entity>
    where
        W: WorldQuery + ?Sized,
        E: EffectSink + ?Sized,
    {
        let mut destroyed = Vec::new();
        let candidates = residency.residents().to_vec();

        for entity in candidates {
            let Some(position) = world.position(entity) else {
                continue;
            };
            let kind = world.kind(entity);
            if !self.should_destroy(position.distance(origin), kind) {
                continue;
            }

            effects.play_destruction(position);
            residency.forget(entity);
            world.destroy(entity);
            info!(entity = entity_id(entity), ?kind, "destroyed at fire point");
            events.push(WeaponEvent::Destroyed {
                entity: entity_id(entity),
                kind,
                position,
            });
            destroyed.push(entity);
        }
        destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(kinds: Option<Vec<EntityKind>>) -> DestructionPolicy {
        DestructionPolicy::new(&WeaponConfig {
            destruction_distance: 1.5,
            destroy_kinds: kinds,
            ..Default::default()
        })
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let policy = policy(None);
        assert!(policy.should_destroy(1.5, Some(EntityKind::Grunt)));
        assert!(policy.should_destroy(0.0, None));
        assert!(!policy.should_destroy(1.5 + 1e-3, Some(EntityKind::Grunt)));
    }

    #[test]
    fn test_kind_filter() {
        let policy = policy(Some(vec![EntityKind::Debris]));
        assert!(policy.should_destroy(1.0, Some(EntityKind::Debris)));
        assert!(!policy.should_destroy(1.0, Some(EntityKind::Grunt)));
        assert!(!policy.should_destroy(1.0, None));
    }
}
