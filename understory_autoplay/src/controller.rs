// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The autoplay controller and its interaction routing.
//!
//! ## Usage
//!
//! 1) Build an [`AutoPlay`] with [`AutoPlay::new`] when the carousel mounts.
//! 2) Render the carousel from [`AutoPlay::carousel_props`].
//! 3) Forward host events: ticks to [`AutoPlay::on_tick`], hover to
//!    [`AutoPlay::on_hover_enter`] / [`AutoPlay::on_hover_leave`], carousel
//!    transitions to [`AutoPlay::on_switching`], manual index changes to
//!    [`AutoPlay::on_change_index`].
//! 4) Pass every new configuration to [`AutoPlay::set_config`].
//! 5) Call [`AutoPlay::dispose`] when the carousel unmounts.
//!
//! Outgoing notifications go to an [`AutoPlayObserver`] supplied per call.

use tracing::{debug, trace};

use crate::config::AutoPlayConfig;
use crate::index::{IndexSource, IndexState};
use crate::timer::{IntervalTimer, TimerId, TimerScheduler, TimerState};

/// Where in its lifecycle a carousel transition is.
///
/// Only [`SwitchPhase::End`] has meaning to the controller; every other value
/// is forwarded untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwitchPhase {
    /// The transition is in progress.
    Move,
    /// The transition completed.
    End,
    /// Any other tag a carousel reports, in the carousel's own numbering.
    Other(u32),
}

impl SwitchPhase {
    /// Returns `true` for the terminal phase.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }
}

/// Receives the controller's outgoing notifications.
///
/// Every method defaults to doing nothing, so hosts implement only the
/// callbacks they care about. `()` is the observer that ignores everything.
pub trait AutoPlayObserver {
    /// The committed index changed from `latest` to `index`.
    ///
    /// In controlled mode this is a proposal: the host decides whether to
    /// feed `index` back through [`AutoPlay::set_config`].
    fn on_change_index(&mut self, index: i64, latest: i64) {
        let _ = (index, latest);
    }

    /// The carousel reported a transition notification.
    fn on_switching(&mut self, index: i64, phase: SwitchPhase) {
        let _ = (index, phase);
    }

    /// The pointer entered the carousel.
    fn on_hover_enter(&mut self) {}

    /// The pointer left the carousel.
    fn on_hover_leave(&mut self) {}
}

impl AutoPlayObserver for () {}

impl<T: AutoPlayObserver + ?Sized> AutoPlayObserver for &mut T {
    fn on_change_index(&mut self, index: i64, latest: i64) {
        (**self).on_change_index(index, latest);
    }

    fn on_switching(&mut self, index: i64, phase: SwitchPhase) {
        (**self).on_switching(index, phase);
    }

    fn on_hover_enter(&mut self) {
        (**self).on_hover_enter();
    }

    fn on_hover_leave(&mut self) {
        (**self).on_hover_leave();
    }
}

/// What the wrapped carousel is rendered with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarouselProps {
    /// Index to display; the host's value in controlled mode.
    pub index: i64,
    /// Whether transition notifications should be routed through
    /// [`AutoPlay::on_switching`] (only while autoplay is enabled).
    pub routes_switching: bool,
    /// Whether hover notifications should be routed through the controller
    /// (whenever hover pausing is enabled).
    pub hover_handlers: bool,
}

/// Timed autoplay controller for a carousel.
///
/// ```
/// use understory_autoplay::{AutoPlay, AutoPlayConfig, AutoPlayObserver, ManualTimers};
///
/// #[derive(Default)]
/// struct Changes(Vec<(i64, i64)>);
///
/// impl AutoPlayObserver for Changes {
///     fn on_change_index(&mut self, index: i64, latest: i64) {
///         self.0.push((index, latest));
///     }
/// }
///
/// let mut timers = ManualTimers::new();
/// let mut changes = Changes::default();
/// let config = AutoPlayConfig::default().with_slide_count(3);
/// let mut autoplay = AutoPlay::new(config, &mut timers);
///
/// for id in timers.advance_by(9000) {
///     autoplay.on_tick(id, &mut changes);
/// }
/// assert_eq!(changes.0, vec![(1, 0), (2, 1), (0, 2)]);
///
/// autoplay.dispose(&mut timers);
/// assert_eq!(timers.active_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct AutoPlay {
    config: AutoPlayConfig,
    index: IndexState,
    scheduler: TimerScheduler,
    is_hovering: bool,
}

impl AutoPlay {
    /// Mounts the controller and starts the timer if the config allows it.
    pub fn new(config: AutoPlayConfig, timers: &mut impl IntervalTimer) -> Self {
        let mut this = Self {
            index: IndexState::new(&config),
            config,
            scheduler: TimerScheduler::new(),
            is_hovering: false,
        };
        this.start(timers);
        this
    }

    /// The configuration currently in effect.
    #[must_use]
    pub fn config(&self) -> &AutoPlayConfig {
        &self.config
    }

    /// The index the carousel should render, tagged with its owner.
    #[must_use]
    pub fn index(&self) -> IndexSource {
        self.index.resolve(&self.config)
    }

    /// Whether the pointer is known to be over the carousel.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    /// Whether the autoplay timer is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// The scheduler state, including the live timer id.
    #[must_use]
    pub fn timer_state(&self) -> TimerState {
        self.scheduler.state()
    }

    /// Props for the wrapped carousel.
    #[must_use]
    pub fn carousel_props(&self) -> CarouselProps {
        CarouselProps {
            index: self.index().index(),
            routes_switching: self.config.autoplay,
            hover_handlers: self.hover_wired(),
        }
    }

    /// Applies a new configuration.
    ///
    /// The external index is mirrored first, without notifying anyone. Then,
    /// if the external index, interval or autoplay flag changed, the timer is
    /// re-evaluated exactly once. Returns `true` if that happened.
    pub fn set_config(&mut self, next: AutoPlayConfig, timers: &mut impl IntervalTimer) -> bool {
        let prev = core::mem::replace(&mut self.config, next);
        if self.index.sync_external(prev.index, &self.config) {
            trace!(index = self.index.stored(), "mirrored external index");
        }
        if prev.restart_key() == self.config.restart_key() {
            return false;
        }
        debug!(
            autoplay = self.config.autoplay,
            interval = self.config.interval,
            index = ?self.config.index,
            "autoplay config changed, re-evaluating timer"
        );
        self.start(timers);
        true
    }

    /// Handles one tick from the host timer.
    ///
    /// Ticks from any interval other than the live one are dropped. Returns
    /// `(next, latest)` when the tick was applied.
    pub fn on_tick(
        &mut self,
        id: TimerId,
        observer: &mut impl AutoPlayObserver,
    ) -> Option<(i64, i64)> {
        if !self.scheduler.owns(id) {
            trace!(id = id.0, "dropping stale autoplay tick");
            return None;
        }
        let (next, latest) = self.index.apply_advance(&self.config);
        trace!(
            next,
            latest,
            controlled = self.config.is_controlled(),
            "autoplay tick"
        );
        observer.on_change_index(next, latest);
        Some((next, latest))
    }

    /// Handles an index change the carousel made on its own, such as a swipe.
    pub fn on_change_index(
        &mut self,
        index: i64,
        latest: i64,
        observer: &mut impl AutoPlayObserver,
    ) {
        self.index.commit(&self.config, index);
        observer.on_change_index(index, latest);
    }

    /// Handles a transition notification from the carousel.
    ///
    /// A running timer means the transition is autoplay's own: the timer is
    /// stopped and stays stopped until the transition ends. A stopped timer
    /// means the user is swiping: autoplay resumes when the swipe ends. The
    /// notification is always forwarded afterwards.
    pub fn on_switching(
        &mut self,
        index: i64,
        phase: SwitchPhase,
        timers: &mut impl IntervalTimer,
        observer: &mut impl AutoPlayObserver,
    ) {
        if self.scheduler.is_running() {
            debug!(index, ?phase, "transition while running, pausing autoplay");
            self.scheduler.stop(timers);
        } else if phase.is_end() {
            debug!(index, "transition ended, resuming autoplay");
            self.start(timers);
        }
        observer.on_switching(index, phase);
    }

    /// The pointer entered the carousel.
    ///
    /// Only has an effect when hover pausing is enabled; the host is notified
    /// either way. The hover flag is kept across config updates, so turning
    /// autoplay back on while hovering stays paused until the pointer leaves.
    pub fn on_hover_enter(
        &mut self,
        timers: &mut impl IntervalTimer,
        observer: &mut impl AutoPlayObserver,
    ) {
        if self.hover_wired() {
            debug!("hover entered, suspending autoplay");
            self.is_hovering = true;
            self.scheduler.stop(timers);
        }
        observer.on_hover_enter();
    }

    /// The pointer left the carousel.
    pub fn on_hover_leave(
        &mut self,
        timers: &mut impl IntervalTimer,
        observer: &mut impl AutoPlayObserver,
    ) {
        if self.hover_wired() {
            debug!("hover left, resuming autoplay");
            self.is_hovering = false;
            self.start(timers);
        }
        observer.on_hover_leave();
    }

    /// Unmounts the controller, releasing its timer.
    pub fn dispose(mut self, timers: &mut impl IntervalTimer) {
        self.scheduler.stop(timers);
        debug!("autoplay controller disposed");
    }

    fn hover_wired(&self) -> bool {
        self.config.pause_on_hover
    }

    fn start(&mut self, timers: &mut impl IntervalTimer) {
        self.scheduler
            .start(&self.config, self.is_hovering, timers);
    }
}
