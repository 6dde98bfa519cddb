//! Virtual-clock timers
//!
//! Nothing fires on its own: `advance` moves the clock and reports which
//! intervals came due, in firing order, for the caller to deliver.

use super::{IntervalTimers, TimerHandle};
use crate::sim::SpawnKind;

#[derive(Debug, Clone)]
struct Interval {
    handle: TimerHandle,
    kind: SpawnKind,
    period_ms: u64,
    next_due: u64,
}

/// Manually advanced interval timers
#[derive(Debug, Clone, Default)]
pub struct ManualTimers {
    now_ms: u64,
    next_id: i32,
    intervals: Vec<Interval>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live intervals
    pub fn active(&self) -> usize {
        self.intervals.len()
    }

    /// Live intervals for one kind
    pub fn active_for(&self, kind: SpawnKind) -> usize {
        self.intervals.iter().filter(|i| i.kind == kind).count()
    }

    /// Move the clock forward, returning every firing in time order
    pub fn advance(&mut self, ms: u64) -> Vec<SpawnKind> {
        let target = self.now_ms + ms;
        let mut fired = Vec::new();
        loop {
            let due = self
                .intervals
                .iter_mut()
                .filter(|i| i.next_due <= target)
                .min_by_key(|i| (i.next_due, i.handle.0));
            let Some(interval) = due else {
                break;
            };
            fired.push(interval.kind);
            interval.next_due += interval.period_ms;
        }
        self.now_ms = target;
        fired
    }
}

impl IntervalTimers for ManualTimers {
    fn set_interval(&mut self, kind: SpawnKind, period_ms: u32) -> Option<TimerHandle> {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let period_ms = u64::from(period_ms.max(1));
        self.intervals.push(Interval {
            handle,
            kind,
            period_ms,
            next_due: self.now_ms + period_ms,
        });
        Some(handle)
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_period() {
        let mut timers = ManualTimers::new();
        timers.set_interval(SpawnKind::Confetti, 120);
        assert!(timers.advance(119).is_empty());
        assert_eq!(timers.advance(1), vec![SpawnKind::Confetti]);
        assert_eq!(timers.advance(360).len(), 3);
    }

    #[test]
    fn test_interleaves_in_time_order() {
        let mut timers = ManualTimers::new();
        timers.set_interval(SpawnKind::Balloon, 500);
        timers.set_interval(SpawnKind::Confetti, 120);
        let fired = timers.advance(500);
        assert_eq!(fired.len(), 5);
        assert_eq!(fired[..4], [SpawnKind::Confetti; 4]);
        assert_eq!(fired[4], SpawnKind::Balloon);
    }

    #[test]
    fn test_cleared_timer_stops() {
        let mut timers = ManualTimers::new();
        let handle = timers.set_interval(SpawnKind::Balloon, 100).unwrap();
        timers.clear_interval(handle);
        timers.clear_interval(handle);
        assert_eq!(timers.active(), 0);
        assert!(timers.advance(1000).is_empty());
    }
}
