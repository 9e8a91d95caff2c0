//! Idle timer and screensaver flag.
//!
//! Any activity restarts the timer and wakes the screensaver. Activation
//! only flips the flag; focus and overlays are left alone.

use crate::scheduler::{Scheduler, TimerId};

#[derive(Debug)]
pub struct IdleMonitor {
    timeout_ms: u64,
    active: bool,
    timer: Option<TimerId>,
}

impl IdleMonitor {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            active: false,
            timer: None,
        }
    }

    pub fn is_screensaver_active(&self) -> bool {
        self.active
    }

    /// Register user activity. Returns `true` if the screensaver woke up.
    pub fn activity<E>(&mut self, timers: &mut Scheduler<E>, expire: E) -> bool {
        let woke = std::mem::replace(&mut self.active, false);
        if woke {
            log::debug!("Screensaver dismissed");
        }
        timers.reschedule(&mut self.timer, self.timeout_ms, expire);
        woke
    }

    /// The idle timer fired.
    pub fn expire(&mut self) {
        self.timer = None;
        if !self.active {
            log::info!("Idle for {}ms -- screensaver on", self.timeout_ms);
        }
        self.active = true;
    }
}
