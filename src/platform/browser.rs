//! `setInterval`-backed timers
//!
//! Each interval owns its JS closure; clearing the interval drops it.

use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::{IntervalTimers, TimerHandle, timeout_ms};
use crate::sim::SpawnKind;

pub struct BrowserTimers {
    on_fire: Rc<dyn Fn(SpawnKind)>,
    closures: HashMap<i32, Closure<dyn FnMut()>>,
}

impl BrowserTimers {
    /// `on_fire` runs from the browser event loop on every firing
    pub fn new(on_fire: impl Fn(SpawnKind) + 'static) -> Self {
        Self {
            on_fire: Rc::new(on_fire),
            closures: HashMap::new(),
        }
    }
}

impl IntervalTimers for BrowserTimers {
    fn set_interval(&mut self, kind: SpawnKind, period_ms: u32) -> Option<TimerHandle> {
        let Some(timeout) = timeout_ms(period_ms) else {
            log::error!("Interval {} ms out of range for {}", period_ms, kind.as_str());
            return None;
        };
        let window = web_sys::window()?;
        let on_fire = self.on_fire.clone();
        let closure = Closure::<dyn FnMut()>::new(move || on_fire(kind));
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => {
                self.closures.insert(id, closure);
                Some(TimerHandle(id))
            }
            Err(e) => {
                log::error!("setInterval failed for {}: {:?}", kind.as_str(), e);
                None
            }
        }
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle.0);
        }
        self.closures.remove(&handle.0);
    }
}
