//! Weapon configuration.
//!
//! [`WeaponConfig`] is a flat set of named parameters supplied when the weapon
//! is constructed. Every field defaults to the matching constant in
//! [`crate::constants`], so a JSON document only needs the keys it overrides:
//!
//! ```json
//! { "pull_radius": 6.0, "falloff": "InverseDistance" }
//! ```
//!
//! Call [`WeaponConfig::validate`] (the controller does this for you) before
//! use; construction fails on invalid tuning instead of clamping it.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EntityKind, FalloffMode};
use crate::error::{require_non_negative, require_positive, ConfigError};
use crate::types::LayerMask;

/// Immutable tuning for the vacuum weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    // --- Pull ---
    pub pull_radius: f32,
    pub pull_strength: f32,
    pub falloff: FalloffMode,
    /// Layers the scanner considers.
    pub layers: LayerMask,

    // --- Heat ---
    pub max_heat: f32,
    pub heat_increase_rate: f32,
    pub heat_decrease_rate: f32,
    /// Scales both heat rates.
    pub heat_multiplier: f32,
    pub cooldown_threshold: f32,
    pub cooldown_duration_secs: f32,

    // --- Destruction ---
    pub destruction_distance: f32,
    /// Kinds that may be consumed. `None` consumes every resident kind.
    pub destroy_kinds: Option<Vec<EntityKind>>,

    // --- Detection ---
    /// Directional probe fan. `None` scans with the pull volume only.
    pub cone: Option<ConeProbeConfig>,
}

/// Parameters for the directional probe fan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeProbeConfig {
    /// Horizontal probes in the fan, `1..=MAX_PROBE_COUNT`.
    pub probe_count: u32,
    /// Full horizontal span of the fan (degrees).
    pub cone_angle_deg: f32,
    /// Radius of each swept probe.
    pub probe_radius: f32,
    pub max_distance: f32,
    /// Kinds detected exclusively by the probes.
    pub probe_kinds: Vec<EntityKind>,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            pull_radius: PULL_RADIUS,
            pull_strength: PULL_STRENGTH,
            falloff: FalloffMode::default(),
            layers: LayerMask::ALL,
            max_heat: MAX_HEAT,
            heat_increase_rate: HEAT_INCREASE_RATE,
            heat_decrease_rate: HEAT_DECREASE_RATE,
            heat_multiplier: HEAT_MULTIPLIER,
            cooldown_threshold: COOLDOWN_THRESHOLD,
            cooldown_duration_secs: COOLDOWN_DURATION_SECS,
            destruction_distance: DESTRUCTION_DISTANCE,
            destroy_kinds: None,
            cone: None,
        }
    }
}

impl Default for ConeProbeConfig {
    fn default() -> Self {
        Self {
            probe_count: PROBE_COUNT,
            cone_angle_deg: PROBE_CONE_ANGLE_DEG,
            probe_radius: PROBE_RADIUS,
            max_distance: PROBE_MAX_DISTANCE,
            probe_kinds: vec![EntityKind::Panel],
        }
    }
}

impl WeaponConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WeaponConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from any reader (file, embedded asset) and validate.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: WeaponConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tuning that would make the weapon incoherent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("pull_radius", self.pull_radius)?;
        require_positive("pull_strength", self.pull_strength)?;
        require_positive("max_heat", self.max_heat)?;
        require_positive("heat_increase_rate", self.heat_increase_rate)?;
        require_positive("heat_decrease_rate", self.heat_decrease_rate)?;
        require_positive("heat_multiplier", self.heat_multiplier)?;
        require_non_negative("cooldown_threshold", self.cooldown_threshold)?;
        require_non_negative("cooldown_duration_secs", self.cooldown_duration_secs)?;
        require_non_negative("destruction_distance", self.destruction_distance)?;

        if self.cooldown_threshold >= self.max_heat {
            return Err(ConfigError::ThresholdNotBelowMax {
                threshold: self.cooldown_threshold,
                max_heat: self.max_heat,
            });
        }

        if let Some(cone) = &self.cone {
            cone.validate()?;
        }
        Ok(())
    }
}

impl ConeProbeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PROBE_COUNT).contains(&self.probe_count) {
            return Err(ConfigError::OutOfRange {
                name: "probe_count",
                value: self.probe_count as f32,
                range: "[1, 64]",
            });
        }
        if !(0.0..=360.0).contains(&self.cone_angle_deg) {
            return Err(ConfigError::OutOfRange {
                name: "cone_angle_deg",
                value: self.cone_angle_deg,
                range: "[0, 360]",
            });
        }
        require_positive("probe_radius", self.probe_radius)?;
        require_positive("probe_max_distance", self.max_distance)?;
        Ok(())
    }

    /// Whether entities of `kind` are found by the probe fan rather than the volume.
    pub fn probes(&self, kind: EntityKind) -> bool {
        self.probe_kinds.contains(&kind)
    }
}
