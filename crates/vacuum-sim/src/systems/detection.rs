//! Detection scanner.
//!
//! Each firing tick, finds the entities inside the weapon's effective pull
//! volume. Two strategies feed one result:
//! - an omnidirectional overlap sphere of `pull_radius` around the origin;
//! - optionally, a fan of swept probes for kinds the volume captures poorly
//!   (flat or thin geometry).
//!
//! When the fan is enabled, probe kinds come ONLY from the fan and every
//! other kind comes ONLY from the volume, so no entity is counted twice.

use std::collections::HashSet;

use glam::{Quat, Vec3};
use hecs::Entity;

use vacuum_core::constants::PROBE_TILTS_DEG;
use vacuum_core::types::{FirePoint, LayerMask};
use vacuum_core::{ConeProbeConfig, WeaponConfig};

use crate::collaborators::WorldQuery;

#[derive(Debug, Clone)]
pub struct DetectionScanner {
    radius: f32,
    layers: LayerMask,
    cone: Option<ConeProbeConfig>,
}

impl DetectionScanner {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            radius: config.pull_radius,
            layers: config.layers,
            cone: config.cone.clone(),
        }
    }

    /// Entities to pull this tick. Each appears at most once; only entities
    /// with a pull behavior that currently accepts vacuuming are returned.
    pub fn scan<W: WorldQuery + ?Sized>(&self, world: &mut W, fire_point: &FirePoint) -> Vec<Entity> {
        let origin = fire_point.origin;
        let mut seen = HashSet::new();
        let mut detected = Vec::new();

        for entity in world.overlap_sphere(origin, self.radius, self.layers) {
            if self.is_probe_kind(&*world, entity) {
                continue;
            }
            if seen.insert(entity) && is_pullable(world, entity) {
                detected.push(entity);
            }
        }

        if let Some(cone) = &self.cone {
            let directions =
                probe_directions(fire_point.direction(), cone.probe_count, cone.cone_angle_deg);
            for dir in directions {
                let hits =
                    world.sweep_probe(origin, dir, cone.probe_radius, cone.max_distance, self.layers);
                for entity in hits {
                    if !self.is_probe_kind(&*world, entity) {
                        continue;
                    }
                    if seen.insert(entity) && is_pullable(world, entity) {
                        detected.push(entity);
                    }
                }
            }
        }

        detected
    }

    fn is_probe_kind<W: WorldQuery + ?Sized>(&self, world: &W, entity: Entity) -> bool {
        match (&self.cone, world.kind(entity)) {
            (Some(cone), Some(kind)) => cone.probes(kind),
            _ => false,
        }
    }
}

fn is_pullable<W: WorldQuery + ?Sized>(world: &mut W, entity: Entity) -> bool {
    world
        .vacuumable(entity)
        .is_some_and(|behavior| behavior.can_be_vacuumed())
}

/// Probe directions: `probe_count` headings fanned horizontally (about +Y)
/// across `cone_angle_deg`, each repeated at the fixed vertical tilts.
/// A single probe points straight along `forward`.
pub fn probe_directions(forward: Vec3, probe_count: u32, cone_angle_deg: f32) -> Vec<Vec3> {
    let forward = forward.try_normalize().unwrap_or(Vec3::Z);
    let span = cone_angle_deg.to_radians();
    let mut directions = Vec::with_capacity(probe_count as usize * PROBE_TILTS_DEG.len());

    for i in 0..probe_count {
        let yaw = if probe_count > 1 {
            -span / 2.0 + span * i as f32 / (probe_count - 1) as f32
        } else {
            0.0
        };
        let heading = Quat::from_axis_angle(Vec3::Y, yaw) * forward;
        // Rotating about heading × up tilts positive angles upward.
        let pitch_axis = heading.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);

        for tilt in PROBE_TILTS_DEG {
            let dir = Quat::from_axis_angle(pitch_axis, tilt.to_radians()) * heading;
            directions.push(dir.normalize_or_zero());
        }
    }
    directions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_count_times_three_tilts() {
        assert_eq!(probe_directions(Vec3::Z, 7, 60.0).len(), 21);
        assert_eq!(probe_directions(Vec3::Z, 1, 60.0).len(), 3);
    }

    #[test]
    fn test_single_probe_points_forward() {
        let dirs = probe_directions(Vec3::new(0.0, 0.0, 2.0), 1, 90.0);
        // Middle tilt is level.
        assert!((dirs[1] - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_fan_spans_cone_edges() {
        let dirs = probe_directions(Vec3::Z, 3, 60.0);
        let level: Vec<Vec3> = dirs.chunks(3).map(|tilts| tilts[1]).collect();
        for dir in &level {
            assert!(dir.y.abs() < 1e-5, "level probe should stay horizontal");
        }
        let edge_deg = level[0].angle_between(Vec3::Z).to_degrees();
        assert!((edge_deg - 30.0).abs() < 1e-3, "edge at {edge_deg}°");
        assert!((level[1] - Vec3::Z).length() < 1e-5);
        assert!((level[0].x + level[2].x).abs() < 1e-5, "fan is symmetric");
    }

    #[test]
    fn test_tilts_go_down_level_up() {
        let dirs = probe_directions(Vec3::Z, 1, 0.0);
        assert!(dirs[0].y < 0.0);
        assert!(dirs[1].y.abs() < 1e-6);
        assert!(dirs[2].y > 0.0);
        let tilt_deg = dirs[2].angle_between(Vec3::Z).to_degrees();
        assert!((tilt_deg - 15.0).abs() < 1e-3);
    }

    #[test]
    fn test_vertical_forward_does_not_degenerate() {
        for dir in probe_directions(Vec3::Y, 3, 60.0) {
            assert!((dir.length() - 1.0).abs() < 1e-4);
        }
    }
}
