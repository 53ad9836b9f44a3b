//! Reference world: an hecs ECS world implementing `WorldQuery`.
//!
//! Entities carry `Position`, `Collider`, `EntityKind`, and optionally a
//! `Pullable` behavior. `integrate` is the host's physics step; the weapon
//! never calls it.

use glam::Vec3;
use hecs::{Entity, World};

use vacuum_core::components::{Collider, Pullable};
use vacuum_core::enums::EntityKind;
use vacuum_core::types::{LayerMask, Position};
use vacuum_core::Vacuumable;

use crate::collaborators::WorldQuery;

#[derive(Default)]
pub struct Scene {
    world: World,
    /// Entities removed through `WorldQuery::destroy`, oldest first.
    destroyed: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a pullable entity.
    pub fn spawn(
        &mut self,
        position: Vec3,
        kind: EntityKind,
        collider: Collider,
        behavior: impl Vacuumable + 'static,
    ) -> Entity {
        self.world.spawn((
            Position(position),
            kind,
            collider,
            Pullable(Box::new(behavior)),
        ))
    }

    /// Spawn scenery with no pull behavior. Queries still see it.
    pub fn spawn_static(&mut self, position: Vec3, kind: EntityKind, collider: Collider) -> Entity {
        self.world.spawn((Position(position), kind, collider))
    }

    /// Teleport an entity. Returns false if it no longer exists.
    pub fn set_position(&mut self, entity: Entity, position: Vec3) -> bool {
        match self.world.get::<&mut Position>(entity) {
            Ok(mut pos) => {
                pos.0 = position;
                true
            }
            Err(_) => false,
        }
    }

    /// Remove an entity through some path other than the weapon
    /// (damage, scripted despawn).
    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    /// Advance every pullable body by `dt`, moving its position.
    pub fn integrate(&mut self, dt: f32) {
        for (_entity, (pos, pullable)) in self.world.query_mut::<(&mut Position, &mut Pullable)>() {
            if let Some(body) = pullable.0.body_mut() {
                pos.0 += body.step(dt);
            }
        }
    }

    pub fn len(&self) -> u32 {
        self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    pub fn destroyed(&self) -> &[Entity] {
        &self.destroyed
    }
}

impl WorldQuery for Scene {
    fn overlap_sphere(&self, origin: Vec3, radius: f32, layers: LayerMask) -> Vec<Entity> {
        let mut hits = Vec::new();
        let mut query = self.world.query::<(&Position, &Collider)>();
        for (entity, (pos, collider)) in query.iter() {
            if collider.layers.intersects(layers) && pos.range_to(origin) <= radius + collider.radius
            {
                hits.push(entity);
            }
        }
        hits
    }

    fn sweep_probe(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
        layers: LayerMask,
    ) -> Vec<Entity> {
        let Some(dir) = direction.try_normalize() else {
            return Vec::new();
        };

        let mut hits: Vec<(f32, Entity)> = Vec::new();
        let mut query = self.world.query::<(&Position, &Collider)>();
        for (entity, (pos, collider)) in query.iter() {
            if !collider.layers.intersects(layers) {
                continue;
            }
            // Closest point on the swept segment to the collider center.
            let along = (pos.0 - origin).dot(dir).clamp(0.0, max_distance);
            let closest = origin + dir * along;
            if pos.range_to(closest) <= radius + collider.radius {
                hits.push((along, entity));
            }
        }

        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.into_iter().map(|(_, entity)| entity).collect()
    }

    fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    fn position(&self, entity: Entity) -> Option<Vec3> {
        self.world.get::<&Position>(entity).ok().map(|pos| pos.0)
    }

    fn kind(&self, entity: Entity) -> Option<EntityKind> {
        self.world.get::<&EntityKind>(entity).ok().map(|kind| *kind)
    }

    fn vacuumable(&mut self, entity: Entity) -> Option<&mut dyn Vacuumable> {
        let pullable = self.world.query_one_mut::<&mut Pullable>(entity).ok()?;
        let behavior: &mut dyn Vacuumable = pullable.0.as_mut();
        Some(behavior)
    }

    fn destroy(&mut self, entity: Entity) {
        if self.world.despawn(entity).is_ok() {
            self.destroyed.push(entity);
        }
    }
}
