//! Particle simulation module
//!
//! Host-independent: randomness comes from a seeded RNG, drawing goes through
//! the `Surface` trait, and timers through `IntervalTimers`.
//! - One tick per animation frame
//! - Throttle drain strictly before update/draw
//! - No `web_sys` here

pub mod cadence;
pub mod engine;
pub mod entity;
pub mod glyph;
pub mod population;
pub mod throttle;

pub use cadence::SpawnCadence;
pub use engine::Engine;
pub use entity::{
    BALLOON_PALETTE, Balloon, CONFETTI_PALETTE, Confetti, ConfettiShape, Particle, SpawnKind,
};
pub use glyph::GlyphPattern;
pub use population::Population;
pub use throttle::SpawnThrottle;
