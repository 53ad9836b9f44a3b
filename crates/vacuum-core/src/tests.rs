#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::components::RigidBody;
    use crate::config::{ConeProbeConfig, WeaponConfig};
    use crate::constants::MAX_PROBE_COUNT;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::WeaponEvent;
    use crate::types::{FirePoint, LayerMask, SimTime};
    use crate::vacuumable::effective_resistance;

    #[test]
    fn test_default_config_is_valid() {
        let config = WeaponConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_heat, 100.0);
        assert_eq!(config.cooldown_threshold, 20.0);
        assert!(config.cone.is_none());
    }

    #[test]
    fn test_partial_json_overrides_only_named_keys() {
        let config = WeaponConfig::from_json_str(
            r#"{ "pull_radius": 8.0, "falloff": "InverseDistance" }"#,
        )
        .unwrap();
        assert_eq!(config.pull_radius, 8.0);
        assert_eq!(config.falloff, FalloffMode::InverseDistance);
        assert_eq!(config.pull_strength, WeaponConfig::default().pull_strength);
    }

    #[test]
    fn test_json_cone_and_destroy_filter() {
        let config = WeaponConfig::from_json_str(
            r#"{
                "destroy_kinds": ["Grunt", "Flyer"],
                "cone": { "probe_count": 5, "probe_kinds": ["Panel", "Debris"] }
            }"#,
        )
        .unwrap();
        let cone = config.cone.as_ref().unwrap();
        assert_eq!(cone.probe_count, 5);
        assert_eq!(cone.cone_angle_deg, ConeProbeConfig::default().cone_angle_deg);
        assert!(cone.probes(EntityKind::Debris));
        assert!(!cone.probes(EntityKind::Grunt));
        assert_eq!(
            config.destroy_kinds,
            Some(vec![EntityKind::Grunt, EntityKind::Flyer])
        );
    }

    #[test]
    fn test_threshold_at_max_heat_rejected() {
        let config = WeaponConfig {
            cooldown_threshold: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdNotBelowMax { .. })
        ));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let zero_radius = WeaponConfig {
            pull_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_radius.validate(),
            Err(ConfigError::NonPositive {
                name: "pull_radius",
                ..
            })
        ));

        let nan_rate = WeaponConfig {
            heat_decrease_rate: f32::NAN,
            ..Default::default()
        };
        assert!(nan_rate.validate().is_err());

        let negative_distance = WeaponConfig {
            destruction_distance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative_distance.validate(),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn test_invalid_cone_rejected() {
        let no_probes = WeaponConfig {
            cone: Some(ConeProbeConfig {
                probe_count: 0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            no_probes.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));

        let wide = WeaponConfig {
            cone: Some(ConeProbeConfig {
                cone_angle_deg: 400.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(wide.validate().is_err());

        let ray = WeaponConfig {
            cone: Some(ConeProbeConfig {
                probe_radius: 0.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            ray.validate(),
            Err(ConfigError::NonPositive { name: "probe_radius", .. })
        ));

        let huge_fan = WeaponConfig {
            cone: Some(ConeProbeConfig {
                probe_count: MAX_PROBE_COUNT + 1,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            huge_fan.validate(),
            Err(ConfigError::OutOfRange { name: "probe_count", .. })
        ));

        let widest_fan = WeaponConfig {
            cone: Some(ConeProbeConfig {
                probe_count: MAX_PROBE_COUNT,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(widest_fan.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = WeaponConfig::from_json_str("{ pull_radius: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid weapon config"));
    }

    #[test]
    fn test_invalid_json_values_fail_validation() {
        let err = WeaponConfig::from_json_str(r#"{ "max_heat": 10.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdNotBelowMax { .. }));
    }

    #[test]
    fn test_layer_mask() {
        let enemies = LayerMask::layer(3);
        let props = LayerMask::layer(4);
        assert!(enemies.intersects(LayerMask::ALL));
        assert!(!enemies.intersects(props));
        assert!(enemies.with(props).intersects(props));
        assert!(!LayerMask::NONE.intersects(LayerMask::ALL));
    }

    #[test]
    fn test_effective_resistance_bounds() {
        assert_eq!(effective_resistance(0.0), 1.0);
        assert_eq!(effective_resistance(1.0), 0.0);
        assert_eq!(effective_resistance(0.25), 0.75);
        assert_eq!(effective_resistance(-3.0), 1.0);
        assert_eq!(effective_resistance(7.0), 0.0);
        assert_eq!(effective_resistance(f32::NAN), 0.0);
    }

    #[test]
    fn test_rigid_body_accelerates_toward_force() {
        let mut body = RigidBody::new(2.0, 0.0);
        body.add_force(Vec3::new(4.0, 0.0, 0.0));
        let moved = body.step(0.5);
        // a = 2 m/s², v = 1 m/s after 0.5 s, displacement = 0.5 m
        assert!((body.velocity.x - 1.0).abs() < 1e-6);
        assert!((moved.x - 0.5).abs() < 1e-6);
        assert_eq!(body.pending_force, Vec3::ZERO);
    }

    #[test]
    fn test_rigid_body_damping_never_reverses() {
        let mut body = RigidBody::new(1.0, 50.0);
        body.velocity = Vec3::new(3.0, 0.0, 0.0);
        body.step(0.1);
        assert_eq!(body.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_fire_point_beam_end() {
        let fp = FirePoint::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(fp.beam_end(5.0), Vec3::new(1.0, 0.0, 10.0));
        let degenerate = FirePoint::new(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(degenerate.direction(), Vec3::Z);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..10 {
            time.advance(0.1);
        }
        assert_eq!(time.tick, 10);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_string(&WeaponEvent::PullStarted { entity: 7 }).unwrap();
        assert_eq!(json, r#"{"type":"PullStarted","entity":7}"#);
    }
}
