//! Shared record of the pull callbacks an entity has received.
//!
//! A pullable entity is owned by the world once spawned, so callers keep a
//! cloned handle to observe what the weapon did to it.

use std::sync::{Arc, Mutex};

use glam::Vec3;

/// Counts of lifecycle callbacks and the most recent force.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PullLog {
    pub starts: u32,
    pub ends: u32,
    pub force_calls: u32,
    /// Direction and magnitude of the latest `on_pull_force`.
    pub last_force: Option<(Vec3, f32)>,
    /// Sum of all force magnitudes received.
    pub total_magnitude: f32,
}

/// Cloneable handle onto a `PullLog`.
#[derive(Debug, Clone, Default)]
pub struct PullTelemetry(Arc<Mutex<PullLog>>);

impl PullTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_start(&self) {
        if let Ok(mut log) = self.0.lock() {
            log.starts += 1;
        }
    }

    pub fn record_end(&self) {
        if let Ok(mut log) = self.0.lock() {
            log.ends += 1;
        }
    }

    pub fn record_force(&self, direction: Vec3, magnitude: f32) {
        if let Ok(mut log) = self.0.lock() {
            log.force_calls += 1;
            log.last_force = Some((direction, magnitude));
            log.total_magnitude += magnitude;
        }
    }

    /// Copy of the current log. A poisoned lock yields an empty log.
    pub fn snapshot(&self) -> PullLog {
        self.0.lock().map(|log| *log).unwrap_or_default()
    }

    /// Whether starts and ends are balanced.
    pub fn is_balanced(&self) -> bool {
        let log = self.snapshot();
        log.starts == log.ends
    }
}
