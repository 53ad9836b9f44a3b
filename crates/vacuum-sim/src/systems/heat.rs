//! Heat state machine.
//!
//! Heat climbs while the weapon fires and drains otherwise. Reaching max heat
//! trips overheat, which only clears once BOTH gates hold:
//! - at least `cooldown_duration_secs` have passed since the trip, and
//! - heat has drained to `cooldown_threshold` or below.
//!
//! The cooldown wait is a timestamp comparison evaluated every update;
//! nothing is scheduled or suspended.

use vacuum_core::enums::HeatPhase;
use vacuum_core::WeaponConfig;

/// Raw heat state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatState {
    /// Current heat in `[0, max_heat]`.
    pub heat: f32,
    /// Set at the trip, cleared when both gates pass.
    pub overheated: bool,
    /// Set at the trip, cleared when the time gate passes.
    pub cooling_down: bool,
    /// Sim time of the last trip (seconds).
    pub last_overheat_secs: Option<f64>,
}

/// What changed during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatTransition {
    Steady,
    /// Heat reached max while firing. The caller must stop firing.
    Overheated,
    /// The time gate passed but heat is still above threshold.
    CooldownElapsed,
    /// Both gates passed; firing is allowed again.
    Recovered,
}

#[derive(Debug, Clone)]
pub struct HeatController {
    max_heat: f32,
    increase_rate: f32,
    decrease_rate: f32,
    cooldown_threshold: f32,
    cooldown_secs: f64,
    state: HeatState,
}

impl HeatController {
    /// Build from a validated config.
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            max_heat: config.max_heat,
            increase_rate: config.heat_increase_rate * config.heat_multiplier,
            decrease_rate: config.heat_decrease_rate * config.heat_multiplier,
            cooldown_threshold: config.cooldown_threshold,
            cooldown_secs: f64::from(config.cooldown_duration_secs),
            state: HeatState::default(),
        }
    }

    /// Advance heat by `dt` seconds. `firing` must already reflect whether the
    /// weapon is permitted to fire; `now_secs` is sim time after this step.
    pub fn update(&mut self, firing: bool, dt: f32, now_secs: f64) -> HeatTransition {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let state = &mut self.state;

        if firing && !state.overheated {
            state.heat = (state.heat + self.increase_rate * dt).min(self.max_heat);
            if state.heat >= self.max_heat {
                state.overheated = true;
                state.cooling_down = true;
                state.last_overheat_secs = Some(now_secs);
                return HeatTransition::Overheated;
            }
            return HeatTransition::Steady;
        }

        state.heat = (state.heat - self.decrease_rate * dt).max(0.0);

        if !state.overheated {
            return HeatTransition::Steady;
        }

        let mut transition = HeatTransition::Steady;
        if state.cooling_down {
            let tripped_at = state.last_overheat_secs.unwrap_or(now_secs);
            if now_secs - tripped_at >= self.cooldown_secs {
                state.cooling_down = false;
                transition = HeatTransition::CooldownElapsed;
            }
        }
        if !state.cooling_down && state.heat <= self.cooldown_threshold {
            state.overheated = false;
            transition = HeatTransition::Recovered;
        }
        transition
    }

    pub fn can_fire(&self) -> bool {
        !self.state.overheated
    }

    pub fn is_overheated(&self) -> bool {
        self.state.overheated
    }

    pub fn phase(&self, firing: bool) -> HeatPhase {
        match (self.state.overheated, self.state.cooling_down) {
            (true, true) => HeatPhase::Overheated,
            (true, false) => HeatPhase::CoolingDown,
            _ if firing => HeatPhase::Firing,
            _ => HeatPhase::Idle,
        }
    }

    pub fn heat(&self) -> f32 {
        self.state.heat
    }

    pub fn max_heat(&self) -> f32 {
        self.max_heat
    }

    /// `heat / max_heat`, in `[0, 1]`.
    pub fn percentage(&self) -> f32 {
        (self.state.heat / self.max_heat).clamp(0.0, 1.0)
    }

    pub fn state(&self) -> &HeatState {
        &self.state
    }

    /// Zero heat and clear any overheat.
    pub fn reset(&mut self) {
        self.state = HeatState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1/8 s steps keep every heat value exactly representable.
    const DT: f32 = 0.125;

    fn controller(threshold: f32, cooldown: f32) -> HeatController {
        HeatController::new(&WeaponConfig {
            cooldown_threshold: threshold,
            cooldown_duration_secs: cooldown,
            ..Default::default()
        })
    }

    /// Fire until the trip; returns the trip time.
    fn fire_to_overheat(heat: &mut HeatController, now: &mut f64) -> f64 {
        loop {
            *now += f64::from(DT);
            if heat.update(true, DT, *now) == HeatTransition::Overheated {
                return *now;
            }
            assert!(*now < 10.0, "never overheated");
        }
    }

    #[test]
    fn test_heat_rises_while_firing_and_clamps() {
        let mut heat = controller(20.0, 3.0);
        let mut now = 0.0;
        let tripped = fire_to_overheat(&mut heat, &mut now);
        // 30/s from 0 reaches 100 on the 27th step (3.375 s).
        assert_eq!(tripped, 3.375);
        assert_eq!(heat.heat(), 100.0);
        assert!(heat.is_overheated());
        assert!(!heat.can_fire());
        assert_eq!(heat.phase(false), HeatPhase::Overheated);
    }

    #[test]
    fn test_no_decay_on_trip_tick() {
        let mut heat = controller(20.0, 3.0);
        let mut now = 0.0;
        fire_to_overheat(&mut heat, &mut now);
        assert_eq!(heat.percentage(), 1.0);
    }

    #[test]
    fn test_heat_drains_when_idle_and_floors_at_zero() {
        let mut heat = controller(20.0, 3.0);
        heat.update(true, 1.0, 1.0);
        assert_eq!(heat.heat(), 30.0);
        heat.update(false, 1.0, 2.0);
        assert_eq!(heat.heat(), 10.0);
        heat.update(false, 1.0, 3.0);
        assert_eq!(heat.heat(), 0.0);
        assert_eq!(heat.phase(false), HeatPhase::Idle);
        assert_eq!(heat.phase(true), HeatPhase::Firing);
    }

    #[test]
    fn test_level_gate_binds_when_decay_is_slow() {
        // Timer clears at trip + 3 s, heat reaches 20 at trip + 4 s.
        let mut heat = controller(20.0, 3.0);
        let mut now = 0.0;
        let tripped = fire_to_overheat(&mut heat, &mut now);

        let mut saw_elapsed = false;
        while heat.is_overheated() {
            now += f64::from(DT);
            match heat.update(false, DT, now) {
                HeatTransition::CooldownElapsed => {
                    saw_elapsed = true;
                    assert_eq!(now - tripped, 3.0);
                    assert_eq!(heat.phase(false), HeatPhase::CoolingDown);
                }
                HeatTransition::Recovered => break,
                _ => {}
            }
            assert!(now - tripped <= 4.0, "still overheated past both gates");
        }
        assert!(saw_elapsed);
        assert_eq!(now - tripped, 4.0);
        assert_eq!(heat.heat(), 20.0);
        assert!(heat.can_fire());
    }

    #[test]
    fn test_time_gate_binds_when_threshold_is_high() {
        // Heat falls below 90 half a second after the trip, but the 3 s timer
        // still holds the weapon.
        let mut heat = controller(90.0, 3.0);
        let mut now = 0.0;
        let tripped = fire_to_overheat(&mut heat, &mut now);

        while now - tripped < 2.875 {
            now += f64::from(DT);
            heat.update(false, DT, now);
            assert!(!heat.can_fire(), "recovered early at {}", now - tripped);
        }
        assert!(heat.heat() <= 90.0);

        now += f64::from(DT);
        assert_eq!(heat.update(false, DT, now), HeatTransition::Recovered);
        assert!(heat.can_fire());
    }

    #[test]
    fn test_heat_multiplier_scales_both_rates() {
        let mut heat = HeatController::new(&WeaponConfig {
            heat_multiplier: 2.0,
            ..Default::default()
        });
        heat.update(true, 1.0, 1.0);
        assert_eq!(heat.heat(), 60.0);
        heat.update(false, 1.0, 2.0);
        assert_eq!(heat.heat(), 20.0);
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let mut heat = controller(20.0, 3.0);
        heat.update(true, f32::NAN, 0.0);
        heat.update(true, -1.0, 0.0);
        assert_eq!(heat.heat(), 0.0);
    }

    #[test]
    fn test_reset_clears_overheat() {
        let mut heat = controller(20.0, 3.0);
        let mut now = 0.0;
        fire_to_overheat(&mut heat, &mut now);
        heat.reset();
        assert!(heat.can_fire());
        assert_eq!(heat.heat(), 0.0);
        assert_eq!(heat.state().last_overheat_secs, None);
    }
}
