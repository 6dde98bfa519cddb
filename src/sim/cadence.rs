//! Continuous spawn cadence
//!
//! While active, a recurring timer feeds batches of one particle kind into the
//! spawn throttle. Starting twice is harmless; stopping only affects future
//! firings.

use super::entity::SpawnKind;
use super::throttle::SpawnThrottle;
use crate::platform::{IntervalTimers, TimerHandle};
use crate::settings::CadenceConfig;

#[derive(Debug, Clone)]
pub struct SpawnCadence {
    kind: SpawnKind,
    config: CadenceConfig,
    active: bool,
    handle: Option<TimerHandle>,
}

impl SpawnCadence {
    pub fn new(kind: SpawnKind, config: CadenceConfig) -> Self {
        Self {
            kind,
            config,
            active: false,
            handle: None,
        }
    }

    pub fn kind(&self) -> SpawnKind {
        self.kind
    }

    pub fn config(&self) -> &CadenceConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Queue the initial burst and start the timer. Returns false if already active.
    pub fn start(
        &mut self,
        throttle: &mut SpawnThrottle,
        timers: &mut impl IntervalTimers,
    ) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        throttle.enqueue(self.kind, self.config.initial_burst);
        self.handle = timers.set_interval(self.kind, self.config.period_ms);
        if self.handle.is_none() {
            log::warn!("No timer for continuous {}; burst only", self.kind.as_str());
        }
        log::info!(
            "Continuous {} started ({} every {} ms)",
            self.kind.as_str(),
            self.config.batch,
            self.config.period_ms
        );
        true
    }

    /// Timer firing: queue one batch if still active
    pub fn fire(&self, throttle: &mut SpawnThrottle) {
        if self.active {
            throttle.enqueue(self.kind, self.config.batch);
        }
    }

    /// Cancel the timer and deactivate. Queued and live particles are untouched.
    pub fn stop(&mut self, timers: &mut impl IntervalTimers) {
        if let Some(handle) = self.handle.take() {
            timers.clear_interval(handle);
        }
        if self.active {
            log::info!("Continuous {} stopped", self.kind.as_str());
        }
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualTimers;

    fn confetti() -> SpawnCadence {
        SpawnCadence::new(SpawnKind::Confetti, CadenceConfig::CONFETTI)
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut cadence = confetti();
        let mut throttle = SpawnThrottle::new(3);
        let mut timers = ManualTimers::new();

        assert!(cadence.start(&mut throttle, &mut timers));
        assert!(!cadence.start(&mut throttle, &mut timers));
        assert_eq!(timers.active(), 1);
        assert_eq!(throttle.len(), 40);
        assert!(cadence.is_active());
    }

    #[test]
    fn test_firing_enqueues_batch() {
        let mut cadence = confetti();
        let mut throttle = SpawnThrottle::new(3);
        let mut timers = ManualTimers::new();
        cadence.start(&mut throttle, &mut timers);
        throttle.clear();

        for kind in timers.advance(240) {
            assert_eq!(kind, SpawnKind::Confetti);
            cadence.fire(&mut throttle);
        }
        assert_eq!(throttle.len(), 12);
    }

    #[test]
    fn test_stop_cancels_timer_keeps_queue() {
        let mut cadence = confetti();
        let mut throttle = SpawnThrottle::new(3);
        let mut timers = ManualTimers::new();
        cadence.start(&mut throttle, &mut timers);

        cadence.stop(&mut timers);
        assert!(!cadence.is_active());
        assert_eq!(cadence.handle(), None);
        assert_eq!(timers.active(), 0);
        assert_eq!(throttle.len(), 40);

        // A late firing after stop is ignored
        cadence.fire(&mut throttle);
        assert_eq!(throttle.len(), 40);

        // Stopping again is a no-op
        cadence.stop(&mut timers);
        assert_eq!(timers.active(), 0);
    }

    #[test]
    fn test_restart_after_stop() {
        let mut cadence = confetti();
        let mut throttle = SpawnThrottle::new(3);
        let mut timers = ManualTimers::new();
        cadence.start(&mut throttle, &mut timers);
        cadence.stop(&mut timers);
        assert!(cadence.start(&mut throttle, &mut timers));
        assert_eq!(timers.active(), 1);
        assert_eq!(throttle.len(), 80);
    }
}
