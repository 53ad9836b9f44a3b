//! Configuration error type.
//!
//! Invalid tuning is rejected when a weapon is constructed; values are never
//! clamped into range behind the caller's back.

use std::fmt;

/// Reasons a `WeaponConfig` is refused.
#[derive(Debug)]
pub enum ConfigError {
    /// A value that must be strictly positive was zero, negative, or NaN.
    NonPositive { name: &'static str, value: f32 },

    /// A value that must be non-negative was negative or NaN.
    Negative { name: &'static str, value: f32 },

    /// A value lies outside its documented range.
    OutOfRange {
        name: &'static str,
        value: f32,
        /// Human-readable description of the accepted range.
        range: &'static str,
    },

    /// The cooldown threshold must sit strictly below max heat, otherwise
    /// overheat could never be entered and left coherently.
    ThresholdNotBelowMax { threshold: f32, max_heat: f32 },

    /// The configuration document could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "'{name}' must be > 0, got {value}")
            }
            ConfigError::Negative { name, value } => {
                write!(f, "'{name}' must be >= 0, got {value}")
            }
            ConfigError::OutOfRange { name, value, range } => {
                write!(f, "'{name}' = {value} is outside {range}")
            }
            ConfigError::ThresholdNotBelowMax {
                threshold,
                max_heat,
            } => write!(
                f,
                "cooldown threshold {threshold} must be below max heat {max_heat}"
            ),
            ConfigError::Parse(e) => write!(f, "invalid weapon config document: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
