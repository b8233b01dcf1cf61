// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory demos.

use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_autoplay::{AutoPlayObserver, SwitchPhase};

/// Installs a formatting subscriber, honoring `RUST_LOG` and defaulting to `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// An observer that logs every notification and remembers the last index.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    /// Most recent index reported through `on_change_index`.
    pub last_index: Option<i64>,
}

impl AutoPlayObserver for LoggingObserver {
    fn on_change_index(&mut self, index: i64, latest: i64) {
        info!(index, latest, "index changed");
        self.last_index = Some(index);
    }

    fn on_switching(&mut self, index: i64, phase: SwitchPhase) {
        info!(index, ?phase, "switching");
    }

    fn on_hover_enter(&mut self) {
        info!("hover enter");
    }

    fn on_hover_leave(&mut self) {
        info!("hover leave");
    }
}
