//! Virtual-time timer queue.
//!
//! All suspension points in the launcher (idle, boot, launch, install,
//! toast, HUD, readouts) are one-shot timers on this queue. Time only moves
//! when the host calls [`Scheduler::pop_due`] / [`Scheduler::advance_to`],
//! which keeps every timing behavior deterministic under test.

use std::collections::{BTreeMap, HashMap};

/// Handle for cancelling a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// One-shot timer queue keyed by due time, then scheduling order.
#[derive(Debug)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), E>,
    /// seq -> due time, for cancellation.
    index: HashMap<u64, u64>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `event` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.queue.insert((due, seq), event);
        self.index.insert(seq, due);
        TimerId(seq)
    }

    /// Cancel a pending timer. Returns `false` if it already fired.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id.0) {
            Some(due) => self.queue.remove(&(due, id.0)).is_some(),
            None => false,
        }
    }

    /// Restart the timer held in `slot`: cancel whatever it pointed at and
    /// store the new handle.
    pub fn reschedule(&mut self, slot: &mut Option<TimerId>, delay_ms: u64, event: E) {
        if let Some(old) = slot.take() {
            self.cancel(old);
        }
        *slot = Some(self.schedule(delay_ms, event));
    }

    /// Cancel every pending timer whose event matches `pred`.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&E) -> bool) -> usize {
        let doomed: Vec<(u64, u64)> = self
            .queue
            .iter()
            .filter(|(_, e)| pred(e))
            .map(|(k, _)| *k)
            .collect();
        for key in &doomed {
            self.queue.remove(key);
            self.index.remove(&key.1);
        }
        doomed.len()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether any pending event matches `pred`.
    pub fn any(&self, mut pred: impl FnMut(&E) -> bool) -> bool {
        self.queue.values().any(|e| pred(e))
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time. Timers scheduled while handling it are visible to the
    /// next call.
    pub fn pop_due(&mut self, until: u64) -> Option<E> {
        let (&(due, seq), _) = self.queue.first_key_value()?;
        if due > until {
            return None;
        }
        let event = self.queue.remove(&(due, seq))?;
        self.index.remove(&seq);
        self.now_ms = self.now_ms.max(due);
        Some(event)
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn advance_to(&mut self, until: u64) {
        self.now_ms = self.now_ms.max(until);
    }

    /// Fire everything due within `dt_ms`, in order, and advance the clock.
    #[cfg(test)]
    pub(crate) fn advance(&mut self, dt_ms: u64) -> Vec<E> {
        let until = self.now_ms.saturating_add(dt_ms);
        let mut fired = Vec::new();
        while let Some(e) = self.pop_due(until) {
            fired.push(e);
        }
        self.advance_to(until);
        fired
    }
}
