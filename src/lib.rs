//! Hex Birthday - confetti and ASCII hex balloons for a greeting page
//!
//! Core modules:
//! - `sim`: Particle simulation (entities, population, spawn throttle, cadences)
//! - `renderer`: Drawing surface abstraction (Canvas 2D on web)
//! - `platform`: Interval timers (browser or virtual clock)
//! - `settings`: Engine configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{CadenceConfig, EngineConfig, QualityPreset, WelcomeBurst};
pub use sim::{Engine, SpawnKind};

/// Effect tuning constants
pub mod consts {
    /// Population ceiling at the default quality preset
    pub const MAX_PARTICLES: usize = 300;
    /// Queued spawns materialized per animation frame
    pub const SPAWN_PER_TICK: usize = 3;

    /// Lifetime of every particle, in ticks
    pub const MAX_LIFE: u32 = 400;

    /// Confetti falls with constant acceleration (per tick²)
    pub const CONFETTI_GRAVITY: f32 = 0.15;
    /// Fraction of life after which confetti starts fading
    pub const CONFETTI_FADE_START: f32 = 0.7;
    /// Confetti further than this below the bottom edge is dead
    pub const CONFETTI_BOTTOM_MARGIN: f32 = 50.0;
    /// Spawn height for confetti (just above the top edge)
    pub const CONFETTI_SPAWN_Y: f32 = -20.0;

    /// Fraction of life after which balloons start fading
    pub const BALLOON_FADE_START: f32 = 0.6;
    /// Balloons above this y are dead
    pub const BALLOON_TOP_LIMIT: f32 = -200.0;
    /// Balloons spawn this far below the bottom edge
    pub const BALLOON_SPAWN_BELOW: f32 = 50.0;
    /// Horizontal wobble amplitude (pixels per tick)
    pub const BALLOON_WOBBLE_AMPLITUDE: f32 = 1.2;
    /// Share of the drift velocity applied each tick
    pub const BALLOON_DRIFT_FACTOR: f32 = 0.1;
    /// Left offset of the glyph block relative to the balloon position
    pub const BALLOON_TEXT_OFFSET_X: f32 = -35.0;
    /// Extra spacing between glyph lines
    pub const BALLOON_LINE_GAP: f32 = 2.0;
    /// Glow is dropped once a balloon fades below this opacity
    pub const BALLOON_GLOW_MIN_OPACITY: f32 = 0.3;
    /// Glow shadow blur radius
    pub const BALLOON_GLOW_BLUR: f32 = 10.0;

    /// Continuous confetti: initial burst, recurring batch, period
    pub const CONFETTI_INITIAL_BURST: usize = 40;
    pub const CONFETTI_PER_SPAWN: usize = 6;
    pub const CONFETTI_SPAWN_RATE_MS: u32 = 120;

    /// Continuous balloons: initial burst, recurring batch, period
    pub const BALLOON_INITIAL_BURST: usize = 15;
    pub const BALLOONS_PER_SPAWN: usize = 4;
    pub const BALLOON_SPAWN_RATE_MS: u32 = 500;

    /// Greeting burst queued shortly after page load
    pub const WELCOME_DELAY_MS: u32 = 500;
    pub const WELCOME_CONFETTI: usize = 25;
    pub const WELCOME_BALLOONS: usize = 5;

    /// Longest delay browser timers accept (signed 32-bit milliseconds)
    pub const MAX_TIMER_MS: u32 = i32::MAX as u32;
}

/// Linear fade from 1 to 0 over the last part of a lifetime.
///
/// `fade_start` is the fraction of `max_life` at which fading begins.
#[inline]
pub fn fade_opacity(life: u32, max_life: u32, fade_start: f32) -> f32 {
    let max = max_life as f32;
    let start = max * fade_start;
    let life = life as f32;
    if life > start {
        (1.0 - (life - start) / (max - start)).clamp(0.0, 1.0)
    } else {
        1.0
    }
}
