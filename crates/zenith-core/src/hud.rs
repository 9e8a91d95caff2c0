//! Transient heads-up displays: the toast slot and the volume HUD.

use crate::scheduler::{Scheduler, TimerId};

/// Single toast slot. A new message replaces the current one and restarts
/// the expiry timer.
#[derive(Debug)]
pub struct Toast {
    duration_ms: u64,
    message: Option<String>,
    timer: Option<TimerId>,
}

impl Toast {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            message: None,
            timer: None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show<E>(&mut self, message: impl Into<String>, timers: &mut Scheduler<E>, expire: E) {
        let message = message.into();
        log::info!("Toast: {message}");
        self.message = Some(message);
        timers.reschedule(&mut self.timer, self.duration_ms, expire);
    }

    pub fn expire(&mut self) {
        self.timer = None;
        self.message = None;
    }
}

/// Volume level plus the HUD's visibility.
#[derive(Debug)]
pub struct VolumeHud {
    level: u8,
    step: u8,
    duration_ms: u64,
    visible: bool,
    timer: Option<TimerId>,
}

impl VolumeHud {
    pub fn new(initial: u8, step: u8, duration_ms: u64) -> Self {
        Self {
            level: initial.min(100),
            step,
            duration_ms,
            visible: false,
            timer: None,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Step the volume up or down (clamped to 0..=100), show the HUD, and
    /// restart its hide timer.
    pub fn adjust<E>(&mut self, up: bool, timers: &mut Scheduler<E>, hide: E) -> u8 {
        self.level = if up {
            self.level.saturating_add(self.step).min(100)
        } else {
            self.level.saturating_sub(self.step)
        };
        self.visible = true;
        timers.reschedule(&mut self.timer, self.duration_ms, hide);
        log::debug!("Volume {}", self.level);
        self.level
    }

    pub fn hide(&mut self) {
        self.timer = None;
        self.visible = false;
    }
}
