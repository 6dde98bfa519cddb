//! Particle entities
//!
//! Two kinds exist: confetti falls under gravity while spinning, balloons rise
//! with a sideways wobble. Both live for [`MAX_LIFE`] ticks and fade out over
//! the tail end of that lifetime.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::glyph::GlyphPattern;
use crate::consts::*;
use crate::fade_opacity;
use crate::renderer::{Color, Surface};

/// Confetti colors
pub const CONFETTI_PALETTE: [Color; 8] = [
    Color(0xff6b9d),
    Color(0xc06c84),
    Color(0xf67280),
    Color(0x6c5b7b),
    Color(0x355c7d),
    Color(0x99b898),
    Color(0xfeceab),
    Color(0xff847c),
];

/// Balloon colors (pastels)
pub const BALLOON_PALETTE: [Color; 6] = [
    Color(0xff6b9d),
    Color(0xc06c84),
    Color(0xf67280),
    Color(0x99b898),
    Color(0xfeceab),
    Color(0xff847c),
];

fn pick(rng: &mut impl Rng, palette: &[Color]) -> Color {
    palette[rng.random_range(0..palette.len())]
}

/// Kind tag carried by spawn requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnKind {
    Confetti,
    Balloon,
}

impl SpawnKind {
    pub const ALL: [SpawnKind; 2] = [SpawnKind::Confetti, SpawnKind::Balloon];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnKind::Confetti => "confetti",
            SpawnKind::Balloon => "balloon",
        }
    }

    /// Entry height for this kind: confetti above the top edge, balloons below the bottom
    pub fn spawn_y(&self, surface_height: f32) -> f32 {
        match self {
            SpawnKind::Confetti => CONFETTI_SPAWN_Y,
            SpawnKind::Balloon => surface_height + BALLOON_SPAWN_BELOW,
        }
    }

    /// Build a particle of this kind at `x` on its entry edge
    pub fn spawn(&self, x: f32, surface_height: f32, rng: &mut impl Rng) -> Particle {
        let pos = Vec2::new(x, self.spawn_y(surface_height));
        match self {
            SpawnKind::Confetti => Particle::Confetti(Confetti::new(pos, rng)),
            SpawnKind::Balloon => Particle::Balloon(Balloon::new(pos, rng)),
        }
    }
}

/// Confetti piece outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfettiShape {
    Square,
    Disc,
}

/// A falling, spinning confetti piece
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Confetti {
    pub pos: Vec2,
    /// Per-tick velocity; y grows by gravity every tick
    pub vel: Vec2,
    /// Degrees
    pub rotation: f32,
    /// Degrees per tick
    pub rotation_speed: f32,
    pub size: f32,
    pub shape: ConfettiShape,
    color: Color,
    pub life: u32,
    pub max_life: u32,
    pub opacity: f32,
}

impl Confetti {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(2.0..6.0)),
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: rng.random_range(-7.5..7.5),
            size: rng.random_range(5.0..15.0),
            shape: if rng.random_bool(0.5) {
                ConfettiShape::Square
            } else {
                ConfettiShape::Disc
            },
            color: pick(rng, &CONFETTI_PALETTE),
            life: 0,
            max_life: MAX_LIFE,
            opacity: 1.0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn update(&mut self) {
        self.vel.y += CONFETTI_GRAVITY;
        self.pos += self.vel;
        self.rotation += self.rotation_speed;
        self.life += 1;
        self.opacity = fade_opacity(self.life, self.max_life, CONFETTI_FADE_START);
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.save();
        surface.set_alpha(self.opacity);
        surface.translate(self.pos.x, self.pos.y);
        surface.rotate(self.rotation.to_radians());
        surface.set_fill(self.color);
        match self.shape {
            ConfettiShape::Disc => surface.fill_circle(0.0, 0.0, self.size / 2.0),
            ConfettiShape::Square => {
                let half = self.size / 2.0;
                surface.fill_rect(-half, -half, self.size, self.size);
            }
        }
        surface.restore();
    }

    /// Out of life, or accelerated past the bottom edge
    pub fn is_dead(&self, surface_height: f32) -> bool {
        self.life >= self.max_life || self.pos.y > surface_height + CONFETTI_BOTTOM_MARGIN
    }
}

/// A rising balloon made of hex glyphs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balloon {
    pub pos: Vec2,
    /// Upward speed (negative y, per tick)
    pub rise_speed: f32,
    /// Sideways drift; only a tenth applies each tick
    pub drift: f32,
    /// Wobble phase (radians)
    pub wobble: f32,
    pub wobble_speed: f32,
    pub font_size: f32,
    pub scale: f32,
    pub glow: bool,
    color: Color,
    pattern: GlyphPattern,
    pub life: u32,
    pub max_life: u32,
    pub opacity: f32,
}

impl Balloon {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            rise_speed: rng.random_range(-4.3..-1.8),
            drift: rng.random_range(-1.5..1.5),
            wobble: rng.random_range(0.0..std::f32::consts::TAU),
            wobble_speed: rng.random_range(0.03..0.09),
            color: pick(rng, &BALLOON_PALETTE),
            pattern: GlyphPattern::generate(rng),
            font_size: rng.random_range(14.0..20.0),
            scale: rng.random_range(0.7..1.0),
            glow: rng.random_bool(0.5),
            life: 0,
            max_life: MAX_LIFE,
            opacity: 1.0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pattern(&self) -> &GlyphPattern {
        &self.pattern
    }

    pub fn update(&mut self) {
        self.pos.y += self.rise_speed;
        self.wobble += self.wobble_speed;
        self.pos.x +=
            self.wobble.sin() * BALLOON_WOBBLE_AMPLITUDE + self.drift * BALLOON_DRIFT_FACTOR;
        self.life += 1;
        self.opacity = fade_opacity(self.life, self.max_life, BALLOON_FADE_START);
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.save();
        surface.set_alpha(self.opacity);
        surface.translate(self.pos.x, self.pos.y);
        surface.scale(self.scale);
        surface.set_fill(self.color);
        surface.set_font(self.font_size);
        if self.glow && self.opacity > BALLOON_GLOW_MIN_OPACITY {
            surface.set_glow(BALLOON_GLOW_BLUR, self.color);
        }
        let mut y = 0.0;
        for line in self.pattern.lines() {
            surface.fill_text(line, BALLOON_TEXT_OFFSET_X, y);
            y += self.font_size + BALLOON_LINE_GAP;
        }
        surface.restore();
    }

    /// Out of life, or well above the top edge
    pub fn is_dead(&self) -> bool {
        self.life >= self.max_life || self.pos.y < BALLOON_TOP_LIMIT
    }
}

/// Any live particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Particle {
    Confetti(Confetti),
    Balloon(Balloon),
}

impl Particle {
    pub fn kind(&self) -> SpawnKind {
        match self {
            Particle::Confetti(_) => SpawnKind::Confetti,
            Particle::Balloon(_) => SpawnKind::Balloon,
        }
    }

    /// Advance one tick
    pub fn update(&mut self) {
        match self {
            Particle::Confetti(c) => c.update(),
            Particle::Balloon(b) => b.update(),
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        match self {
            Particle::Confetti(c) => c.draw(surface),
            Particle::Balloon(b) => b.draw(surface),
        }
    }

    pub fn is_dead(&self, surface_height: f32) -> bool {
        match self {
            Particle::Confetti(c) => c.is_dead(surface_height),
            Particle::Balloon(b) => b.is_dead(),
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            Particle::Confetti(c) => c.pos,
            Particle::Balloon(b) => b.pos,
        }
    }

    pub fn life(&self) -> u32 {
        match self {
            Particle::Confetti(c) => c.life,
            Particle::Balloon(b) => b.life,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Particle::Confetti(c) => c.opacity,
            Particle::Balloon(b) => b.opacity,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Particle::Confetti(c) => c.color(),
            Particle::Balloon(b) => b.color(),
        }
    }
}
