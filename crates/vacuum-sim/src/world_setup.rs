//! Entity spawn factories for setting up a reference scene.
//!
//! Enemies and props get the collider and layer that match their kind so the
//! weapon's layer mask can tell them apart.

use glam::Vec3;
use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vacuum_core::components::Collider;
use vacuum_core::constants::DEFAULT_COLLIDER_RADIUS;
use vacuum_core::types::LayerMask;
use vacuum_enemies::{Enemy, EnemyArchetype, Prop};

use crate::scene::Scene;

pub const ENEMY_LAYER: LayerMask = LayerMask::layer(3);
pub const PROP_LAYER: LayerMask = LayerMask::layer(4);

/// Spawn an enemy with its archetype's default profile.
pub fn spawn_enemy(scene: &mut Scene, archetype: EnemyArchetype, position: Vec3) -> Entity {
    spawn_custom_enemy(scene, Enemy::new(archetype), position)
}

/// Spawn a pre-built enemy (custom resistance, shared telemetry, ...).
pub fn spawn_custom_enemy(scene: &mut Scene, enemy: Enemy, position: Vec3) -> Entity {
    let kind = enemy.archetype().kind();
    let collider = Collider::new(enemy.profile().collider_radius, ENEMY_LAYER);
    scene.spawn(position, kind, collider, enemy)
}

pub fn spawn_prop(scene: &mut Scene, prop: Prop, position: Vec3) -> Entity {
    let kind = prop.kind();
    let collider = Collider::new(DEFAULT_COLLIDER_RADIUS, PROP_LAYER);
    scene.spawn(position, kind, collider, prop)
}

/// Scatter `count` enemies uniformly in a horizontal disc around `center`.
/// Archetypes cycle grunt, grunt, flyer so every swarm is mixed.
pub fn spawn_swarm(
    scene: &mut Scene,
    rng: &mut ChaCha8Rng,
    count: usize,
    center: Vec3,
    radius: f32,
) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(count);
    for i in 0..count {
        let archetype = if i % 3 == 2 {
            EnemyArchetype::Flyer
        } else {
            EnemyArchetype::Grunt
        };
        let bearing = rng.gen_range(0.0..std::f32::consts::TAU);
        let range = radius * rng.gen_range(0.0f32..1.0).sqrt();
        let offset = Vec3::new(bearing.sin() * range, 0.0, bearing.cos() * range);
        spawned.push(spawn_enemy(scene, archetype, center + offset));
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::WorldQuery;
    use rand::SeedableRng;
    use vacuum_core::enums::EntityKind;

    #[test]
    fn test_swarm_stays_in_disc() {
        let mut scene = Scene::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = Vec3::new(0.0, 0.0, 4.0);
        let swarm = spawn_swarm(&mut scene, &mut rng, 12, center, 3.0);

        assert_eq!(swarm.len(), 12);
        for &entity in &swarm {
            let pos = scene.position(entity).expect("spawned");
            assert!(pos.distance(center) <= 3.0 + 1e-4);
        }
        let flyers = swarm
            .iter()
            .filter(|&&e| scene.kind(e) == Some(EntityKind::Flyer))
            .count();
        assert_eq!(flyers, 4);
    }

    #[test]
    fn test_layers_split_enemies_and_props() {
        let mut scene = Scene::new();
        spawn_enemy(&mut scene, EnemyArchetype::Grunt, Vec3::ZERO);
        spawn_prop(&mut scene, Prop::debris(), Vec3::X);

        assert_eq!(scene.overlap_sphere(Vec3::ZERO, 5.0, ENEMY_LAYER).len(), 1);
        assert_eq!(scene.overlap_sphere(Vec3::ZERO, 5.0, PROP_LAYER).len(), 1);
        assert_eq!(
            scene
                .overlap_sphere(Vec3::ZERO, 5.0, ENEMY_LAYER.with(PROP_LAYER))
                .len(),
            2
        );
    }
}
