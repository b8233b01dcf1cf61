// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay configuration.
//!
//! [`AutoPlayConfig`] is the full set of options a host hands to
//! [`AutoPlay`](crate::AutoPlay) on construction and on every update. It is a
//! plain value: the controller keeps the most recent one and compares it with
//! the next one to decide whether the timer has to be re-evaluated.
//!
//! ```
//! use understory_autoplay::{AutoPlayConfig, Direction};
//!
//! let config = AutoPlayConfig::default()
//!     .with_interval(5000)
//!     .with_direction(Direction::Decremental)
//!     .with_slide_count(4);
//!
//! assert!(config.autoplay);
//! assert!(!config.is_controlled());
//! assert_eq!(config.validate(), Ok(()));
//! ```

use core::fmt;

/// Default delay between two autoplay ticks, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u32 = 3000;

/// Sign of each autoplay step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Each tick moves to the next slide.
    #[default]
    Incremental,
    /// Each tick moves to the previous slide.
    Decremental,
}

impl Direction {
    /// Returns the signed step applied by one tick.
    #[must_use]
    pub const fn step(self) -> i64 {
        match self {
            Self::Incremental => 1,
            Self::Decremental => -1,
        }
    }
}

/// Options recognized by the autoplay controller.
///
/// Anything else a host wants to give the wrapped carousel is forwarded by the
/// host itself; the controller never sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoPlayConfig {
    /// Enables or disables the timer entirely.
    pub autoplay: bool,
    /// Sign of each advance step.
    pub direction: Direction,
    /// Tick period in milliseconds.
    pub interval: u32,
    /// Suspend autoplay while the pointer hovers the carousel.
    pub pause_on_hover: bool,
    /// Externally owned index. `Some` puts the controller in controlled mode.
    pub index: Option<i64>,
    /// Explicit number of slides; overrides the bound derived from
    /// `child_count` and `visible_slides_count`.
    pub slide_count: Option<usize>,
    /// Number of slides shown at once.
    pub visible_slides_count: usize,
    /// Number of child slides rendered by the wrapped carousel.
    pub child_count: usize,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            direction: Direction::Incremental,
            interval: DEFAULT_INTERVAL_MS,
            pause_on_hover: false,
            index: None,
            slide_count: None,
            visible_slides_count: 1,
            child_count: 0,
        }
    }
}

impl AutoPlayConfig {
    /// Sets whether autoplay is enabled.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Sets the step direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the tick period in milliseconds.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets whether hovering pauses autoplay.
    #[must_use]
    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    /// Puts the controller in controlled mode with the given index, or back in
    /// uncontrolled mode with `None`.
    #[must_use]
    pub fn with_index(mut self, index: Option<i64>) -> Self {
        self.index = index;
        self
    }

    /// Sets the explicit slide count.
    #[must_use]
    pub fn with_slide_count(mut self, slide_count: usize) -> Self {
        self.slide_count = Some(slide_count);
        self
    }

    /// Sets how many slides are visible at once.
    #[must_use]
    pub fn with_visible_slides_count(mut self, visible_slides_count: usize) -> Self {
        self.visible_slides_count = visible_slides_count;
        self
    }

    /// Sets the number of child slides of the wrapped carousel.
    #[must_use]
    pub fn with_child_count(mut self, child_count: usize) -> Self {
        self.child_count = child_count;
        self
    }

    /// Returns `true` when the index is owned by the host.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.index.is_some()
    }

    /// Returns the fields whose change forces a timer restart.
    #[must_use]
    pub fn restart_key(&self) -> RestartKey {
        RestartKey {
            index: self.index,
            interval: self.interval,
            autoplay: self.autoplay,
        }
    }

    /// Checks for configurations that cannot cycle or would spin the timer host.
    ///
    /// The controller itself never calls this and tolerates every value; it is
    /// offered to hosts that want to reject bad input early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay && self.interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.visible_slides_count == 0 {
            return Err(ConfigError::ZeroVisibleSlides);
        }
        if self.slide_count == Some(0) {
            return Err(ConfigError::ZeroSlideCount);
        }
        if let Some(index) = self.index
            && index < 0
        {
            return Err(ConfigError::NegativeIndex(index));
        }
        Ok(())
    }
}

/// Shallow-equality key over the options that restart the timer.
///
/// Two configs with equal keys never cause a restart, whatever else differs
/// between them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RestartKey {
    /// External index, if any.
    pub index: Option<i64>,
    /// Tick period in milliseconds.
    pub interval: u32,
    /// Whether autoplay is enabled.
    pub autoplay: bool,
}

/// A configuration rejected by [`AutoPlayConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Autoplay is enabled with a zero tick period.
    ZeroInterval,
    /// `visible_slides_count` is zero, so no bound can be derived from children.
    ZeroVisibleSlides,
    /// `slide_count` was given as zero.
    ZeroSlideCount,
    /// The external index is negative.
    NegativeIndex(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInterval => write!(f, "autoplay interval must be greater than zero"),
            Self::ZeroVisibleSlides => {
                write!(f, "visible slides count must be greater than zero")
            }
            Self::ZeroSlideCount => write!(f, "slide count must be greater than zero"),
            Self::NegativeIndex(index) => write!(f, "external index {index} is negative"),
        }
    }
}

impl core::error::Error for ConfigError {}
