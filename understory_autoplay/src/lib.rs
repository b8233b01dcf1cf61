// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_autoplay --heading-base-level=0

//! Understory Autoplay: timed advancement for carousel-like views.
//!
//! This crate adds autoplay to a carousel that something else renders. It
//! decides when the displayed slide should move, reconciles that with an index
//! the host may own, and pauses around user interaction. It does **not** draw
//! slides, recognize swipes, or animate anything; the wrapped carousel does.
//!
//! The pieces are:
//!
//! - [`AutoPlayConfig`]: the recognized options, with [`Direction`] and the
//!   [`RestartKey`] used to decide when the timer must be re-evaluated.
//! - [`IndexState`] and [`IndexSource`]: who owns the index, plus
//!   [`wrap_index`] / [`index_bound`] for wraparound arithmetic.
//! - [`TimerScheduler`]: a stopped/running machine over a host-provided
//!   [`IntervalTimer`].
//! - [`AutoPlay`]: the controller that combines them and routes hover and
//!   transition notifications into pause/resume decisions.
//! - [`ManualTimers`]: a deterministic simulated clock for tests and headless
//!   hosts.
//!
//! ## Controlled and uncontrolled index
//!
//! When [`AutoPlayConfig::index`] is `None` the controller owns the index and
//! commits every step itself. When it is `Some`, the host owns it: ticks only
//! propose the next index through [`AutoPlayObserver::on_change_index`] and the
//! rendered value is whatever the host passes in on the next update.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_autoplay::{AutoPlay, AutoPlayConfig, IndexSource, ManualTimers};
//!
//! let mut timers = ManualTimers::new();
//! let config = AutoPlayConfig::default().with_slide_count(3);
//! let mut autoplay = AutoPlay::new(config, &mut timers);
//!
//! // The host event loop delivers ticks; here the simulated clock does.
//! for id in timers.advance_by(3000) {
//!     autoplay.on_tick(id, &mut ());
//! }
//! assert_eq!(autoplay.index(), IndexSource::Internal(1));
//!
//! autoplay.dispose(&mut timers);
//! ```
//!
//! ## Pausing
//!
//! The timer stops while the pointer hovers the carousel (with
//! [`AutoPlayConfig::pause_on_hover`]) and while a transition is in flight. A
//! transition that arrives with the timer running is autoplay's own; one that
//! arrives with the timer stopped is a user swipe, and autoplay resumes when it
//! reports [`SwitchPhase::End`].
//!
//! Diagnostics are emitted through `tracing`; install a subscriber in the host
//! binary to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod index;
mod manual;
mod timer;

pub use config::{AutoPlayConfig, ConfigError, DEFAULT_INTERVAL_MS, Direction, RestartKey};
pub use controller::{AutoPlay, AutoPlayObserver, CarouselProps, SwitchPhase};
pub use index::{IndexSource, IndexState, advance, index_bound, index_max, wrap_index};
pub use manual::ManualTimers;
pub use timer::{IntervalTimer, TimerId, TimerScheduler, TimerState};
