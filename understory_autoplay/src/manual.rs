// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated interval timer for tests and headless hosts.
//!
//! [`ManualTimers`] keeps its own millisecond clock that only moves when
//! [`ManualTimers::advance_by`] is called. Every call returns the ticks that
//! came due in firing order, which the caller then hands to
//! [`AutoPlay::on_tick`](crate::AutoPlay::on_tick).
//!
//! ```
//! use understory_autoplay::{IntervalTimer, ManualTimers};
//!
//! let mut timers = ManualTimers::new();
//! let fast = timers.start_interval(100);
//! let slow = timers.start_interval(250);
//!
//! let fired = timers.advance_by(300);
//! assert_eq!(fired.as_slice(), &[fast, fast, slow, fast]);
//! assert_eq!(timers.now(), 300);
//! ```

use smallvec::SmallVec;

use crate::timer::{IntervalTimer, TimerId};

#[derive(Copy, Clone, Debug)]
struct Interval {
    id: TimerId,
    period: u64,
    due: u64,
}

/// Deterministic [`IntervalTimer`] driven by explicit clock advances.
#[derive(Clone, Debug, Default)]
pub struct ManualTimers {
    now: u64,
    next_id: u64,
    intervals: SmallVec<[Interval; 2]>,
}

impl ManualTimers {
    /// Creates a host with the clock at zero and nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of intervals currently scheduled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if `id` is still scheduled.
    #[must_use]
    pub fn is_active(&self, id: TimerId) -> bool {
        self.intervals.iter().any(|interval| interval.id == id)
    }

    /// Moves the clock forward and returns every tick that came due.
    ///
    /// Ticks are ordered by due time, then by id. An interval fires once per
    /// elapsed period.
    pub fn advance_by(&mut self, ms: u64) -> SmallVec<[TimerId; 4]> {
        let target = self.now.saturating_add(ms);
        let mut fired = SmallVec::new();
        loop {
            let next = self
                .intervals
                .iter_mut()
                .filter(|interval| interval.due <= target)
                .min_by_key(|interval| (interval.due, interval.id));
            let Some(interval) = next else {
                break;
            };
            self.now = interval.due;
            interval.due = interval.due.saturating_add(interval.period);
            fired.push(interval.id);
        }
        self.now = target;
        fired
    }
}

impl IntervalTimer for ManualTimers {
    fn start_interval(&mut self, period_ms: u32) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // A zero period would never let the clock move past `now`.
        let period = u64::from(period_ms.max(1));
        self.intervals.push(Interval {
            id,
            period,
            due: self.now.saturating_add(period),
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.intervals.retain(|interval| interval.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_once_per_period() {
        let mut timers = ManualTimers::new();
        let id = timers.start_interval(3000);

        assert!(timers.advance_by(2999).is_empty());
        assert_eq!(timers.advance_by(1).as_slice(), &[id]);
        assert_eq!(timers.advance_by(9000).as_slice(), &[id, id, id]);
        assert_eq!(timers.now(), 12000);
    }

    #[test]
    fn interval_starts_from_current_time() {
        let mut timers = ManualTimers::new();
        timers.advance_by(500);
        let id = timers.start_interval(1000);
        assert!(timers.advance_by(999).is_empty());
        assert_eq!(timers.advance_by(1).as_slice(), &[id]);
    }

    #[test]
    fn cancelled_intervals_never_fire() {
        let mut timers = ManualTimers::new();
        let id = timers.start_interval(10);
        timers.cancel(id);
        assert!(!timers.is_active(id));
        assert!(timers.advance_by(1000).is_empty());

        // Cancelling twice is harmless.
        timers.cancel(id);
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut timers = ManualTimers::new();
        let a = timers.start_interval(10);
        timers.cancel(a);
        let b = timers.start_interval(10);
        assert_ne!(a, b);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut timers = ManualTimers::new();
        let id = timers.start_interval(0);
        assert_eq!(timers.advance_by(3).as_slice(), &[id, id, id]);
    }

    #[test]
    fn simultaneous_ticks_order_by_id() {
        let mut timers = ManualTimers::new();
        let a = timers.start_interval(50);
        let b = timers.start_interval(50);
        assert_eq!(timers.advance_by(50).as_slice(), &[a, b]);
    }
}
