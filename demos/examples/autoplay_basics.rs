// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay basics.
//!
//! Drive a three-slide carousel through ticks, a hover pause, a manual swipe
//! and a controlled-mode handoff using `understory_autoplay` and a simulated
//! clock.
//!
//! Run:
//! - `cargo run -p understory_demos --example autoplay_basics`
//! - `RUST_LOG=trace cargo run -p understory_demos --example autoplay_basics`

use understory_autoplay::{AutoPlay, AutoPlayConfig, ManualTimers, SwitchPhase};
use understory_demos::{LoggingObserver, init_tracing};

fn tick(autoplay: &mut AutoPlay, timers: &mut ManualTimers, ms: u64, log: &mut LoggingObserver) {
    for id in timers.advance_by(ms) {
        autoplay.on_tick(id, log);
    }
}

fn main() {
    init_tracing();

    let mut timers = ManualTimers::new();
    let mut log = LoggingObserver::default();
    let config = AutoPlayConfig::default()
        .with_slide_count(3)
        .with_pause_on_hover(true);
    if let Err(err) = config.validate() {
        eprintln!("invalid config: {err}");
        return;
    }

    let mut autoplay = AutoPlay::new(config.clone(), &mut timers);
    println!("Start at: {:?}", autoplay.index());

    // Two ticks.
    tick(&mut autoplay, &mut timers, 6000, &mut log);
    println!("After 6s: {:?}", autoplay.index());

    // Hovering holds the carousel still.
    autoplay.on_hover_enter(&mut timers, &mut log);
    tick(&mut autoplay, &mut timers, 9000, &mut log);
    println!("After hovering 9s: {:?}", autoplay.index());
    autoplay.on_hover_leave(&mut timers, &mut log);

    // A manual swipe back to the first slide.
    autoplay.on_switching(2, SwitchPhase::Move, &mut timers, &mut log);
    autoplay.on_change_index(0, 2, &mut log);
    autoplay.on_switching(0, SwitchPhase::End, &mut timers, &mut log);
    tick(&mut autoplay, &mut timers, 3000, &mut log);
    println!("After swipe and 3s: {:?}", autoplay.index());

    // Hand the index over to the host, which accepts one proposal.
    autoplay.set_config(config.clone().with_index(Some(2)), &mut timers);
    tick(&mut autoplay, &mut timers, 3000, &mut log);
    if let Some(next) = log.last_index {
        autoplay.set_config(config.with_index(Some(next)), &mut timers);
    }
    println!("Controlled: {:?}", autoplay.index());

    autoplay.dispose(&mut timers);
    println!("Disposed, {} timers left", timers.active_count());
}
