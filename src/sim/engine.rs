//! Particle engine
//!
//! One owned instance per page. The host calls [`Engine::frame`] once per
//! animation frame and forwards timer firings to [`Engine::on_interval`];
//! everything else is an external trigger.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::cadence::SpawnCadence;
use super::entity::SpawnKind;
use super::population::Population;
use super::throttle::SpawnThrottle;
use crate::platform::IntervalTimers;
use crate::renderer::Surface;
use crate::settings::EngineConfig;

pub struct Engine {
    config: EngineConfig,
    population: Population,
    throttle: SpawnThrottle,
    confetti: SpawnCadence,
    balloons: SpawnCadence,
    rng: Pcg32,
    frames: u64,
}

impl Engine {
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        log::info!(
            "Particle engine: {} quality, {} max particles, seed {}",
            config.quality.as_str(),
            config.max_particles(),
            seed
        );
        Self {
            population: Population::new(config.max_particles()),
            throttle: SpawnThrottle::new(config.spawn_per_tick),
            confetti: SpawnCadence::new(SpawnKind::Confetti, config.confetti),
            balloons: SpawnCadence::new(SpawnKind::Balloon, config.balloons),
            rng: Pcg32::seed_from_u64(seed),
            frames: 0,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn throttle(&self) -> &SpawnThrottle {
        &self.throttle
    }

    pub fn cadence(&self, kind: SpawnKind) -> &SpawnCadence {
        match kind {
            SpawnKind::Confetti => &self.confetti,
            SpawnKind::Balloon => &self.balloons,
        }
    }

    fn cadence_mut(&mut self, kind: SpawnKind) -> &mut SpawnCadence {
        match kind {
            SpawnKind::Confetti => &mut self.confetti,
            SpawnKind::Balloon => &mut self.balloons,
        }
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One animation frame: clear, drain the throttle, update and draw
    pub fn frame(&mut self, surface: &mut impl Surface) {
        self.frames += 1;
        surface.clear();
        self.throttle.drain_tick(
            &mut self.population,
            surface.width(),
            surface.height(),
            &mut self.rng,
        );
        self.population.tick(surface);
    }

    /// Request `count` spawns through the throttle
    pub fn queue(&mut self, kind: SpawnKind, count: usize) {
        self.throttle.enqueue(kind, count);
    }

    /// Spawn immediately, bypassing the throttle; stops at the first rejection
    pub fn spawn_now(&mut self, kind: SpawnKind, count: usize, width: f32, height: f32) -> usize {
        let mut spawned = 0;
        for _ in 0..count {
            let x = self.rng.random::<f32>() * width;
            if !self.population.try_spawn(kind.spawn(x, height, &mut self.rng)) {
                break;
            }
            spawned += 1;
        }
        spawned
    }

    /// Start the continuous effect for `kind` (no-op if running)
    pub fn start_effect(&mut self, kind: SpawnKind, timers: &mut impl IntervalTimers) -> bool {
        let Self {
            confetti,
            balloons,
            throttle,
            ..
        } = self;
        let cadence = match kind {
            SpawnKind::Confetti => confetti,
            SpawnKind::Balloon => balloons,
        };
        cadence.start(throttle, timers)
    }

    pub fn stop_effect(&mut self, kind: SpawnKind, timers: &mut impl IntervalTimers) {
        self.cadence_mut(kind).stop(timers);
    }

    /// A cadence timer fired
    pub fn on_interval(&mut self, kind: SpawnKind) {
        let Self {
            confetti,
            balloons,
            throttle,
            ..
        } = self;
        match kind {
            SpawnKind::Confetti => confetti.fire(throttle),
            SpawnKind::Balloon => balloons.fire(throttle),
        }
    }

    /// Page-load greeting burst
    pub fn welcome(&mut self) {
        let welcome = self.config.welcome;
        log::info!(
            "Welcome burst: {} confetti, {} balloons",
            welcome.confetti,
            welcome.balloons
        );
        self.throttle.enqueue(SpawnKind::Confetti, welcome.confetti);
        self.throttle.enqueue(SpawnKind::Balloon, welcome.balloons);
    }

    /// Drop all particles and pending spawns; cadences keep running
    pub fn clear_particles(&mut self) {
        self.population.clear();
        self.throttle.clear();
    }

    /// Stop both cadences and drop everything. Call between frames only.
    pub fn reset(&mut self, timers: &mut impl IntervalTimers) {
        for kind in SpawnKind::ALL {
            self.cadence_mut(kind).stop(timers);
        }
        self.clear_particles();
        log::info!("Particle engine reset");
    }
}
