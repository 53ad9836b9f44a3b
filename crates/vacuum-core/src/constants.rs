//! Weapon tuning defaults and simulation constants.
//!
//! These are the authoritative defaults behind `WeaponConfig::default()`.

/// Default simulation step rate (Hz) used by the demo driver.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Pull ---

/// Radius of the omnidirectional pull volume (meters).
pub const PULL_RADIUS: f32 = 5.0;

/// Base pull strength (force units).
pub const PULL_STRENGTH: f32 = 100.0;

/// Distance from the fire point at which a resident entity is consumed (meters).
pub const DESTRUCTION_DISTANCE: f32 = 1.5;

/// Beam visual length as a multiple of the pull radius.
pub const BEAM_LENGTH_FACTOR: f32 = 2.0;

// --- Heat ---

/// Heat ceiling. Reaching it while firing trips overheat.
pub const MAX_HEAT: f32 = 100.0;

/// Heat gained per second of firing.
pub const HEAT_INCREASE_RATE: f32 = 30.0;

/// Heat shed per second while not firing.
pub const HEAT_DECREASE_RATE: f32 = 20.0;

/// Heat level that must be reached from above before overheat clears.
pub const COOLDOWN_THRESHOLD: f32 = 20.0;

/// Minimum seconds between the overheat trip and recovery.
pub const COOLDOWN_DURATION_SECS: f32 = 3.0;

/// Scales both heat rates.
pub const HEAT_MULTIPLIER: f32 = 1.0;

// --- Cone probing ---

/// Number of horizontal probes in the detection fan.
pub const PROBE_COUNT: u32 = 7;

/// Upper bound on `probe_count`; each probe is swept at every tilt every tick.
pub const MAX_PROBE_COUNT: u32 = 64;

/// Full horizontal span of the probe fan (degrees).
pub const PROBE_CONE_ANGLE_DEG: f32 = 60.0;

/// Radius of each swept probe (meters).
pub const PROBE_RADIUS: f32 = 0.3;

/// Maximum probe reach (meters).
pub const PROBE_MAX_DISTANCE: f32 = 10.0;

/// Vertical tilts applied to every horizontal probe (degrees).
pub const PROBE_TILTS_DEG: [f32; 3] = [-15.0, 0.0, 15.0];

// --- Bodies ---

/// Default rigid body mass (kg).
pub const DEFAULT_BODY_MASS: f32 = 1.0;

/// Default linear damping (per second).
pub const DEFAULT_LINEAR_DAMPING: f32 = 1.2;

/// Default collider radius for spawned entities (meters).
pub const DEFAULT_COLLIDER_RADIUS: f32 = 0.5;
