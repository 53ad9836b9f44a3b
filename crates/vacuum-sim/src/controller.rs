//! Weapon controller: the per-tick orchestrator.
//!
//! `WeaponController` owns the heat machine and the resident set, borrows the
//! world and effect collaborators it was built with, and produces a
//! `WeaponSnapshot` each tick. Tick order is fixed:
//!
//! 1. prune residents that vanished from the world
//! 2. update heat (an overheat trip forces a stop)
//! 3. if still firing: scan, reconcile residency, apply forces, destroy
//!
//! Destruction is the last step, so nothing earlier in the tick sees a
//! just-destroyed entity.

use glam::Vec3;
use hecs::Entity;
use tracing::{debug, info, warn};

use vacuum_core::enums::HeatPhase;
use vacuum_core::events::WeaponEvent;
use vacuum_core::state::{ResidentView, WeaponSnapshot};
use vacuum_core::types::{FirePoint, SimTime};
use vacuum_core::{ConfigError, WeaponConfig};

use crate::collaborators::{entity_id, EffectSink, WorldQuery};
use crate::systems::destruction::DestructionPolicy;
use crate::systems::detection::DetectionScanner;
use crate::systems::force::ForceApplier;
use crate::systems::heat::{HeatController, HeatTransition};
use crate::systems::residency::ResidencyTracker;

pub struct WeaponController<W: WorldQuery, E: EffectSink> {
    config: WeaponConfig,
    world: Option<W>,
    effects: Option<E>,
    heat: HeatController,
    scanner: DetectionScanner,
    residency: ResidencyTracker,
    forces: ForceApplier,
    destruction: DestructionPolicy,
    time: SimTime,
    firing: bool,
    fire_point: FirePoint,
    events: Vec<WeaponEvent>,
}

impl<W: WorldQuery, E: EffectSink> WeaponController<W, E> {
    /// Build a controller. An invalid config is rejected. A missing
    /// collaborator is logged and leaves the controller inert: it ticks, but
    /// never fires.
    pub fn new(config: WeaponConfig, world: Option<W>, effects: Option<E>) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            warn!(%err, "weapon config rejected");
            return Err(err);
        }
        if world.is_none() {
            warn!("no world collaborator, weapon is inert");
        }
        if effects.is_none() {
            warn!("no effect collaborator, weapon is inert");
        }

        Ok(Self {
            heat: HeatController::new(&config),
            scanner: DetectionScanner::new(&config),
            residency: ResidencyTracker::new(),
            forces: ForceApplier::new(&config),
            destruction: DestructionPolicy::new(&config),
            config,
            world,
            effects,
            time: SimTime::default(),
            firing: false,
            fire_point: FirePoint::default(),
            events: Vec::new(),
        })
    }

    pub fn with_collaborators(config: WeaponConfig, world: W, effects: E) -> Result<Self, ConfigError> {
        Self::new(config, Some(world), Some(effects))
    }

    /// Begin firing. Silent no-op when already firing, overheated, or inert.
    pub fn start_firing(&mut self) {
        if self.firing || !self.can_fire() {
            return;
        }
        let Some(effects) = self.effects.as_mut() else {
            return;
        };

        effects.show_beam(
            self.fire_point.origin,
            self.fire_point.beam_end(self.config.pull_radius),
        );
        effects.play_loop();
        self.firing = true;
        self.events.push(WeaponEvent::FiringStarted);
        debug!(heat = self.heat.heat(), "firing started");
    }

    /// Stop firing and release every resident. Always allowed; a no-op when
    /// not firing.
    pub fn stop_firing(&mut self) {
        if !self.firing {
            return;
        }
        self.firing = false;

        if let Some(world) = self.world.as_mut() {
            self.residency.prune_stale(&*world, &mut self.events);
            self.residency.release_all(world, &mut self.events);
        } else {
            self.residency.clear();
        }
        if let Some(effects) = self.effects.as_mut() {
            effects.hide_beam();
            effects.stop_loop();
        }
        self.events.push(WeaponEvent::FiringStopped);
        debug!(heat = self.heat.heat(), "firing stopped");
    }

    /// Advance the weapon by `dt` seconds with the muzzle at `fire_point`.
    pub fn tick(&mut self, fire_point: FirePoint, dt: f32) -> WeaponSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.fire_point = fire_point;
        self.time.advance(dt);

        if let Some(world) = self.world.as_ref() {
            self.residency.prune_stale(world, &mut self.events);
        }

        self.update_heat(dt);

        if self.firing {
            self.run_pull();
        }

        self.build_snapshot()
    }

    fn update_heat(&mut self, dt: f32) {
        let now = self.time.elapsed_secs;
        match self.heat.update(self.firing, dt, now) {
            HeatTransition::Steady => {}
            HeatTransition::Overheated => {
                info!(at_secs = now, "weapon overheated");
                self.events.push(WeaponEvent::Overheated { at_secs: now });
                self.stop_firing();
            }
            HeatTransition::CooldownElapsed => {
                debug!(heat = self.heat.heat(), "cooldown timer elapsed");
                self.events.push(WeaponEvent::CooldownElapsed);
            }
            HeatTransition::Recovered => {
                info!(heat = self.heat.heat(), "weapon recovered from overheat");
                self.events.push(WeaponEvent::Recovered);
            }
        }
    }

    fn run_pull(&mut self) {
        let (Some(world), Some(effects)) = (self.world.as_mut(), self.effects.as_mut()) else {
            return;
        };
        let fire_point = self.fire_point;
        let origin = fire_point.origin;

        effects.aim_beam(origin, fire_point.beam_end(self.config.pull_radius));

        let detected = self.scanner.scan(world, &fire_point);
        let diff = self.residency.reconcile(&detected, world, &mut self.events);
        if !diff.entered.is_empty() || !diff.exited.is_empty() {
            debug!(
                entered = diff.entered.len(),
                exited = diff.exited.len(),
                residents = self.residency.len(),
                "residency changed"
            );
        }

        self.forces.apply(world, self.residency.residents(), origin);
        self.destruction
            .run(world, &mut self.residency, origin, effects, &mut self.events);
    }

    fn build_snapshot(&mut self) -> WeaponSnapshot {
        let origin = self.fire_point.origin;
        let mut residents = Vec::with_capacity(self.residency.len());
        if let Some(world) = self.world.as_mut() {
            for &entity in self.residency.residents() {
                residents.push(resident_view(world, entity, origin));
            }
        }

        WeaponSnapshot {
            time: self.time,
            phase: self.phase(),
            heat: self.heat.heat(),
            heat_percentage: self.heat.percentage(),
            is_firing: self.firing,
            is_overheated: self.heat.is_overheated(),
            can_fire: self.can_fire(),
            residents,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Stop firing, then zero heat and clear any overheat.
    pub fn reset(&mut self) {
        self.stop_firing();
        self.heat.reset();
        info!("weapon reset");
    }

    pub fn is_firing(&self) -> bool {
        self.firing
    }

    pub fn is_overheated(&self) -> bool {
        self.heat.is_overheated()
    }

    /// Not overheated and not inert.
    pub fn can_fire(&self) -> bool {
        !self.is_inert() && self.heat.can_fire()
    }

    pub fn heat_percentage(&self) -> f32 {
        self.heat.percentage()
    }

    pub fn current_heat(&self) -> f32 {
        self.heat.heat()
    }

    pub fn max_heat(&self) -> f32 {
        self.heat.max_heat()
    }

    pub fn phase(&self) -> HeatPhase {
        self.heat.phase(self.firing)
    }

    pub fn residents(&self) -> &[Entity] {
        self.residency.residents()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &WeaponConfig {
        &self.config
    }

    /// True when a collaborator was missing at construction.
    pub fn is_inert(&self) -> bool {
        self.world.is_none() || self.effects.is_none()
    }

    pub fn world(&self) -> Option<&W> {
        self.world.as_ref()
    }

    /// Mutable world access for the host (physics, external despawns).
    pub fn world_mut(&mut self) -> Option<&mut W> {
        self.world.as_mut()
    }

    pub fn effects(&self) -> Option<&E> {
        self.effects.as_ref()
    }

    pub fn effects_mut(&mut self) -> Option<&mut E> {
        self.effects.as_mut()
    }
}

fn resident_view<W: WorldQuery + ?Sized>(world: &mut W, entity: Entity, origin: Vec3) -> ResidentView {
    let distance = world
        .position(entity)
        .map_or(0.0, |position| position.distance(origin));
    let kind = world.kind(entity);
    let resistance = world
        .vacuumable(entity)
        .map_or(0.0, |behavior| behavior.resistance());

    ResidentView {
        entity: entity_id(entity),
        kind,
        distance,
        resistance,
    }
}
