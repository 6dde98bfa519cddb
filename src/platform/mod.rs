//! Platform abstraction layer
//!
//! Interval timers drive the continuous effects. In the browser they map to
//! `setInterval`; tests and the native demo use a virtual clock.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod manual;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTimers;
pub use manual::ManualTimers;

use crate::consts::MAX_TIMER_MS;
use crate::sim::SpawnKind;

/// Opaque id of a scheduled interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Recurring timer service.
///
/// A firing for `kind` must eventually reach `Engine::on_interval(kind)`,
/// always between animation frames.
pub trait IntervalTimers {
    /// Start a recurring timer; `None` if the host refused it
    fn set_interval(&mut self, kind: SpawnKind, period_ms: u32) -> Option<TimerHandle>;

    /// Cancel a timer; unknown handles are ignored
    fn clear_interval(&mut self, handle: TimerHandle);
}

/// Milliseconds as the host's signed timeout argument; `None` if it would wrap
pub fn timeout_ms(ms: u32) -> Option<i32> {
    if ms > MAX_TIMER_MS {
        return None;
    }
    i32::try_from(ms).ok()
}
