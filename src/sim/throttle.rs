//! Spawn throttle
//!
//! Bulk spawn requests are queued as kind tokens and materialized a few per
//! frame so a burst trickles in instead of appearing at once.

use std::collections::VecDeque;

use rand::Rng;

use super::entity::SpawnKind;
use super::population::Population;

/// FIFO of pending spawns, drained at a fixed quota per tick
#[derive(Debug, Clone)]
pub struct SpawnThrottle {
    queue: VecDeque<SpawnKind>,
    per_tick: usize,
}

impl SpawnThrottle {
    pub fn new(per_tick: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            per_tick,
        }
    }

    pub fn per_tick(&self) -> usize {
        self.per_tick
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Append `count` tokens of `kind` to the tail
    pub fn enqueue(&mut self, kind: SpawnKind, count: usize) {
        self.queue.extend(std::iter::repeat_n(kind, count));
    }

    /// Pending tokens, head first
    pub fn pending(&self) -> impl Iterator<Item = SpawnKind> + '_ {
        self.queue.iter().copied()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Spawn up to `per_tick` queued particles at random x across the surface.
    ///
    /// If the population is full when a spawn is attempted, the whole
    /// remaining queue is dropped rather than held for later. Returns the
    /// number of particles spawned.
    pub fn drain_tick(
        &mut self,
        population: &mut Population,
        surface_width: f32,
        surface_height: f32,
        rng: &mut impl Rng,
    ) -> usize {
        let mut spawned = 0;
        for _ in 0..self.per_tick {
            if self.queue.is_empty() {
                break;
            }
            if population.is_full() {
                log::debug!(
                    "Population full ({}), dropping {} queued spawns",
                    population.len(),
                    self.queue.len()
                );
                self.queue.clear();
                break;
            }
            let Some(kind) = self.queue.pop_front() else {
                break;
            };
            let x = rng.random::<f32>() * surface_width;
            if population.try_spawn(kind.spawn(x, surface_height, rng)) {
                spawned += 1;
            }
        }
        spawned
    }
}
