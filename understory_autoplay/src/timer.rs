// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer Scheduler: a two-state machine over a host-provided interval timer.
//!
//! The crate never owns a clock. Hosts implement [`IntervalTimer`] on top of
//! whatever their event loop offers and feed each fired tick back to the
//! controller together with the [`TimerId`] they handed out. The scheduler
//! holds at most one id; a tick carrying any other id is stale.
//!
//! ```
//! use understory_autoplay::{AutoPlayConfig, ManualTimers, TimerScheduler};
//!
//! let mut timers = ManualTimers::new();
//! let mut scheduler = TimerScheduler::new();
//! let config = AutoPlayConfig::default();
//!
//! scheduler.start(&config, false, &mut timers);
//! assert!(scheduler.is_running());
//!
//! // Restarting replaces the handle instead of stacking a second timer.
//! scheduler.start(&config, false, &mut timers);
//! assert_eq!(timers.active_count(), 1);
//!
//! scheduler.stop(&mut timers);
//! assert_eq!(timers.active_count(), 0);
//! ```

use tracing::{debug, trace};

use crate::config::AutoPlayConfig;

/// Opaque handle for a scheduled interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Host interval timer facility.
pub trait IntervalTimer {
    /// Schedules a recurring tick every `period_ms` milliseconds.
    ///
    /// Ids must not be reused for the lifetime of the host.
    fn start_interval(&mut self, period_ms: u32) -> TimerId;

    /// Cancels a scheduled interval. Unknown or already cancelled ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

impl<T: IntervalTimer + ?Sized> IntervalTimer for &mut T {
    fn start_interval(&mut self, period_ms: u32) -> TimerId {
        (**self).start_interval(period_ms)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id);
    }
}

/// State of a [`TimerScheduler`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TimerState {
    /// No interval is scheduled.
    #[default]
    Stopped,
    /// An interval is scheduled under this id.
    Running(TimerId),
}

/// Owns the single autoplay interval.
#[derive(Clone, Debug, Default)]
pub struct TimerScheduler {
    state: TimerState,
}

impl TimerScheduler {
    /// Creates a stopped scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Returns `true` while an interval is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running(_))
    }

    /// Returns `true` if `id` is the interval this scheduler currently owns.
    #[must_use]
    pub fn owns(&self, id: TimerId) -> bool {
        self.state == TimerState::Running(id)
    }

    /// Returns `true` if `config` and the hover flag allow the timer to run.
    #[must_use]
    pub fn may_run(config: &AutoPlayConfig, is_hovering: bool) -> bool {
        config.autoplay && !(config.pause_on_hover && is_hovering)
    }

    /// Stops any current interval, then schedules a new one if allowed.
    ///
    /// Returns `true` if the scheduler ends up running.
    pub fn start(
        &mut self,
        config: &AutoPlayConfig,
        is_hovering: bool,
        timers: &mut impl IntervalTimer,
    ) -> bool {
        self.stop(timers);
        if !Self::may_run(config, is_hovering) {
            trace!(
                autoplay = config.autoplay,
                is_hovering, "autoplay timer held stopped"
            );
            return false;
        }
        let id = timers.start_interval(config.interval);
        debug!(id = id.0, interval = config.interval, "autoplay timer started");
        self.state = TimerState::Running(id);
        true
    }

    /// Cancels the current interval, if any. Idempotent.
    pub fn stop(&mut self, timers: &mut impl IntervalTimer) {
        if let TimerState::Running(id) = core::mem::take(&mut self.state) {
            timers.cancel(id);
            debug!(id = id.0, "autoplay timer stopped");
        }
    }
}
