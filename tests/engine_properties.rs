//! Engine-level invariants: capacity ceiling, lifecycles, throttle pacing.

use glam::Vec2;
use hex_birthday::consts::{BALLOON_FADE_START, MAX_LIFE};
use hex_birthday::platform::ManualTimers;
use hex_birthday::renderer::RecordingSurface;
use hex_birthday::sim::{Balloon, Confetti, Particle, Population, SpawnThrottle};
use hex_birthday::{Engine, EngineConfig, QualityPreset, SpawnKind};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn kind_strategy() -> impl Strategy<Value = SpawnKind> {
    prop_oneof![Just(SpawnKind::Confetti), Just(SpawnKind::Balloon)]
}

proptest! {
    #[test]
    fn population_never_exceeds_capacity(
        seed in any::<u64>(),
        bursts in prop::collection::vec((kind_strategy(), 0usize..80), 1..12),
        frames in 1usize..120,
    ) {
        let mut engine = Engine::new(EngineConfig::from_preset(QualityPreset::Low), seed);
        let capacity = engine.population().capacity();
        let mut surface = RecordingSurface::new(640.0, 480.0);
        for (i, (kind, count)) in bursts.iter().enumerate() {
            engine.queue(*kind, *count);
            if i % 3 == 0 {
                engine.spawn_now(*kind, *count / 4, 640.0, 480.0);
            }
            prop_assert!(engine.population().len() <= capacity);
        }
        for _ in 0..frames {
            engine.frame(&mut surface);
            prop_assert!(engine.population().len() <= capacity);
        }
    }

    #[test]
    fn life_monotonic_and_opacity_bounded(seed in any::<u64>(), ticks in 1u32..450) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut particles = [
            Particle::Confetti(Confetti::new(Vec2::new(100.0, -20.0), &mut rng)),
            Particle::Balloon(Balloon::new(Vec2::new(100.0, 650.0), &mut rng)),
        ];
        for particle in particles.iter_mut() {
            let mut last = particle.life();
            for _ in 0..ticks {
                particle.update();
                prop_assert!(particle.life() > last);
                last = particle.life();
                let opacity = particle.opacity();
                prop_assert!((0.0..=1.0).contains(&opacity));
            }
        }
    }

    #[test]
    fn drain_never_exceeds_quota(queued in 0usize..50, quota in 1usize..8) {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut population = Population::new(usize::MAX);
        let mut throttle = SpawnThrottle::new(quota);
        throttle.enqueue(SpawnKind::Confetti, queued);
        let spawned = throttle.drain_tick(&mut population, 800.0, 600.0, &mut rng);
        prop_assert_eq!(spawned, queued.min(quota));
        prop_assert_eq!(throttle.len(), queued - spawned);
    }
}

#[test]
fn ten_confetti_over_four_drains() {
    let mut rng = Pcg32::seed_from_u64(99);
    let mut population = Population::new(usize::MAX);
    let mut throttle = SpawnThrottle::new(3);
    throttle.enqueue(SpawnKind::Confetti, 10);
    for _ in 0..4 {
        throttle.drain_tick(&mut population, 1024.0, 768.0, &mut rng);
    }
    assert!(throttle.is_empty());
    assert_eq!(population.len(), 10);
    assert_eq!(population.count(SpawnKind::Confetti), 10);
}

#[test]
fn full_population_discards_queue() {
    let mut engine = Engine::new(EngineConfig::default(), 3);
    let capacity = engine.population().capacity();
    engine.spawn_now(SpawnKind::Confetti, capacity, 800.0, 600.0);
    engine.queue(SpawnKind::Balloon, 5);

    let mut surface = RecordingSurface::new(800.0, 600.0);
    engine.frame(&mut surface);
    assert_eq!(engine.throttle().len(), 0);
    assert_eq!(engine.population().len(), capacity);
}

#[test]
fn balloon_fade_begins_after_threshold() {
    let mut rng = Pcg32::seed_from_u64(11);
    let mut balloon = Balloon::new(Vec2::new(300.0, 700.0), &mut rng);
    balloon.life = (MAX_LIFE as f32 * BALLOON_FADE_START) as u32 - 1;
    balloon.update();
    assert_eq!(balloon.opacity, 1.0);
    balloon.update();
    assert!(balloon.opacity < 1.0);
}

#[test]
fn confetti_dies_exactly_at_max_life() {
    let mut rng = Pcg32::seed_from_u64(12);
    let mut confetti = Confetti::new(Vec2::new(300.0, 10.0), &mut rng);
    confetti.life = MAX_LIFE - 1;
    assert!(!confetti.is_dead(600.0));
    confetti.life = MAX_LIFE;
    assert!(confetti.is_dead(600.0));
}

#[test]
fn start_twice_one_timer_one_burst() {
    let mut engine = Engine::new(EngineConfig::default(), 5);
    let mut timers = ManualTimers::new();
    engine.start_effect(SpawnKind::Confetti, &mut timers);
    engine.start_effect(SpawnKind::Confetti, &mut timers);
    assert_eq!(timers.active(), 1);
    assert_eq!(engine.throttle().len(), engine.config().confetti.initial_burst);
}

#[test]
fn reset_silences_timers() {
    let mut engine = Engine::new(EngineConfig::default(), 6);
    let mut timers = ManualTimers::new();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    for kind in SpawnKind::ALL {
        engine.start_effect(kind, &mut timers);
    }
    for _ in 0..60 {
        for kind in timers.advance(16) {
            engine.on_interval(kind);
        }
        engine.frame(&mut surface);
    }

    engine.reset(&mut timers);
    assert!(engine.population().is_empty());
    assert!(engine.throttle().is_empty());
    for kind in SpawnKind::ALL {
        assert!(!engine.cadence(kind).is_active());
    }
    for kind in timers.advance(10_000) {
        engine.on_interval(kind);
    }
    assert!(engine.throttle().is_empty());

    // The loop keeps running harmlessly on empty state
    engine.frame(&mut surface);
    assert!(engine.population().is_empty());
}

#[test]
fn confetti_ceiling_reached_under_continuous_effect() {
    let mut engine = Engine::new(EngineConfig::default(), 8);
    let mut timers = ManualTimers::new();
    let mut surface = RecordingSurface::new(1920.0, 5000.0);
    engine.start_effect(SpawnKind::Confetti, &mut timers);
    engine.start_effect(SpawnKind::Balloon, &mut timers);
    let capacity = engine.population().capacity();
    let mut peak = 0;
    for _ in 0..600 {
        for kind in timers.advance(17) {
            engine.on_interval(kind);
        }
        engine.frame(&mut surface);
        peak = peak.max(engine.population().len());
    }
    assert!(peak <= capacity);
    assert!(peak > 100);
}
