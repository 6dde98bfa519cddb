//! Bounded set of live particles

use super::entity::{Particle, SpawnKind};
use crate::renderer::Surface;

/// Live particles, never more than `capacity`.
///
/// Order carries no meaning; iteration order is insertion order only as an
/// implementation detail.
#[derive(Debug, Clone)]
pub struct Population {
    particles: Vec<Particle>,
    capacity: usize,
}

impl Population {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.particles.len() >= self.capacity
    }

    /// Insert unless full; returns whether the particle was kept
    pub fn try_spawn(&mut self, particle: Particle) -> bool {
        if self.is_full() {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Update then draw every particle, then drop the dead ones.
    ///
    /// Each particle is visited exactly once per tick.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        let height = surface.height();
        self.particles.retain_mut(|particle| {
            particle.update();
            particle.draw(surface);
            !particle.is_dead(height)
        });
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Live particles of one kind
    pub fn count(&self, kind: SpawnKind) -> usize {
        self.particles.iter().filter(|p| p.kind() == kind).count()
    }
}
