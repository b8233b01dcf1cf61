// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index bookkeeping: ownership, wraparound and advancement.
//!
//! The index shown by the carousel either belongs to the controller
//! (uncontrolled mode) or to the host (controlled mode). [`IndexState`] keeps a
//! mirror of the last index it saw in both modes, but only the uncontrolled
//! mirror is ever surfaced; in controlled mode [`IndexState::resolve`] always
//! answers with the host's value.
//!
//! ```
//! use understory_autoplay::{AutoPlayConfig, IndexSource, IndexState};
//!
//! let config = AutoPlayConfig::default().with_slide_count(3);
//! let mut state = IndexState::new(&config);
//! assert_eq!(state.resolve(&config), IndexSource::Internal(0));
//!
//! // Three steps on a three-slide carousel come back to the start.
//! for _ in 0..3 {
//!     state.apply_advance(&config);
//! }
//! assert_eq!(state.resolve(&config).index(), 0);
//! ```

use crate::config::AutoPlayConfig;

/// True modulo: reduces `index` into `0..bound` for any sign of `index`.
///
/// A `bound` of zero leaves `index` untouched.
#[must_use]
pub fn wrap_index(index: i64, bound: usize) -> i64 {
    match i64::try_from(bound) {
        Ok(bound) if bound > 0 => index.rem_euclid(bound),
        _ => index,
    }
}

/// Number of reachable positions, or `None` when no bound can be derived.
///
/// An explicit, non-zero `slide_count` wins. Otherwise the children are grouped
/// into pages of `visible_slides_count`, with a trailing partial page counting
/// as one position.
#[must_use]
pub fn index_bound(
    slide_count: Option<usize>,
    visible_slides_count: usize,
    child_count: usize,
) -> Option<usize> {
    match slide_count {
        Some(count) if count > 0 => Some(count),
        _ if child_count > 0 && visible_slides_count > 0 => {
            Some(child_count.div_ceil(visible_slides_count))
        }
        _ => None,
    }
}

/// Returns the largest valid index for `config`, if bounded.
#[must_use]
pub fn index_max(config: &AutoPlayConfig) -> Option<i64> {
    index_bound(
        config.slide_count,
        config.visible_slides_count,
        config.child_count,
    )
    .and_then(|bound| i64::try_from(bound).ok())
    .map(|bound| bound - 1)
}

/// Computes the index one step away from `current` in the configured direction.
///
/// Without a bound the step is applied as-is and the result may leave the
/// slide range.
#[must_use]
pub fn advance(config: &AutoPlayConfig, current: i64) -> i64 {
    let candidate = current.saturating_add(config.direction.step());
    match index_bound(
        config.slide_count,
        config.visible_slides_count,
        config.child_count,
    ) {
        Some(bound) => wrap_index(candidate, bound),
        None => candidate,
    }
}

/// Which party owns the index that is currently rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexSource {
    /// The controller owns the index.
    Internal(i64),
    /// The host owns the index and supplied this value.
    External(i64),
}

impl IndexSource {
    /// The index value, regardless of owner.
    #[must_use]
    pub const fn index(self) -> i64 {
        match self {
            Self::Internal(index) | Self::External(index) => index,
        }
    }

    /// Returns `true` for host-owned indices.
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Index State Manager.
///
/// Holds the controller's own index. In controlled mode that value is only a
/// mirror used to notice host changes between updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexState {
    index: i64,
}

impl IndexState {
    /// Seeds the state from the external index, or `0`.
    #[must_use]
    pub fn new(config: &AutoPlayConfig) -> Self {
        Self {
            index: config.index.unwrap_or(0),
        }
    }

    /// Returns the index the carousel should render.
    #[must_use]
    pub fn resolve(&self, config: &AutoPlayConfig) -> IndexSource {
        match config.index {
            Some(external) => IndexSource::External(external),
            None => IndexSource::Internal(self.index),
        }
    }

    /// The stored index, which is authoritative only in uncontrolled mode.
    #[must_use]
    pub fn stored(&self) -> i64 {
        self.index
    }

    /// Advances from the resolved index and commits the result when uncontrolled.
    ///
    /// Returns `(next, latest)`: the proposed index and the index it was
    /// computed from. In controlled mode nothing is stored; the caller reports
    /// `next` to the host, which decides.
    pub fn apply_advance(&mut self, config: &AutoPlayConfig) -> (i64, i64) {
        let latest = self.resolve(config).index();
        let next = advance(config, latest);
        self.commit(config, next);
        (next, latest)
    }

    /// Commits an index chosen elsewhere (for example a manual swipe).
    ///
    /// Controlled mode leaves the stored value alone.
    pub fn commit(&mut self, config: &AutoPlayConfig, index: i64) {
        if !config.is_controlled() {
            self.index = index;
        }
    }

    /// Mirrors a changed external index into the stored value.
    ///
    /// Returns `true` if the mirror was updated. This never counts as an index
    /// change and callers must not notify observers about it.
    pub fn sync_external(&mut self, previous: Option<i64>, config: &AutoPlayConfig) -> bool {
        match config.index {
            Some(external) if Some(external) != previous => {
                self.index = external;
                true
            }
            _ => false,
        }
    }
}
