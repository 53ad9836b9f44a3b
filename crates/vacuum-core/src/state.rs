//! Weapon state snapshot: the read-only view produced after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, HeatPhase};
use crate::events::WeaponEvent;
use crate::types::SimTime;

/// Everything a HUD or audio layer needs after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponSnapshot {
    pub time: SimTime,
    pub phase: HeatPhase,
    pub heat: f32,
    /// `heat / max_heat`, in `[0, 1]`.
    pub heat_percentage: f32,
    pub is_firing: bool,
    pub is_overheated: bool,
    pub can_fire: bool,
    /// Entities being pulled at the end of the tick.
    pub residents: Vec<ResidentView>,
    pub events: Vec<WeaponEvent>,
}

/// One entity in the affected set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidentView {
    pub entity: u64,
    pub kind: Option<EntityKind>,
    /// Distance to the fire point (meters).
    pub distance: f32,
    pub resistance: f32,
}
