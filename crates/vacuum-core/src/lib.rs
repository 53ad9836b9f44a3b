//! Core types and definitions for the vacuum weapon subsystem.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the `Vacuumable` capability, components, weapon configuration, events,
//! snapshots, and constants. It has no dependency on an ECS or runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
pub mod vacuumable;

pub use config::{ConeProbeConfig, WeaponConfig};
pub use error::ConfigError;
pub use vacuumable::Vacuumable;

#[cfg(test)]
mod tests;
