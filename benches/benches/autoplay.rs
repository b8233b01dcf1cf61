// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use std::time::Duration;
use understory_autoplay::{AutoPlay, AutoPlayConfig, ManualTimers, SwitchPhase};

fn bench_tick_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("autoplay/ticks");

    for ticks in [64_u64, 1_024, 16_384] {
        group.throughput(Throughput::Elements(ticks));
        group.bench_with_input(
            BenchmarkId::new("uncontrolled", ticks),
            &ticks,
            |b, &ticks| {
                b.iter(|| {
                    let mut timers = ManualTimers::new();
                    let config = AutoPlayConfig::default()
                        .with_interval(10)
                        .with_slide_count(7);
                    let mut autoplay = AutoPlay::new(config, &mut timers);
                    for id in timers.advance_by(10 * ticks) {
                        black_box(autoplay.on_tick(id, &mut ()));
                    }
                    autoplay.dispose(&mut timers);
                });
            },
        );
    }

    group.finish();
}

fn bench_restart_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("autoplay/restarts");
    group.measurement_time(Duration::from_secs(3));

    // A host that accepts every proposal restarts the timer on each tick, then
    // the carousel reports the transition it animates.
    group.bench_function("controlled_round_trip", |b| {
        b.iter(|| {
            let mut timers = ManualTimers::new();
            let base = AutoPlayConfig::default()
                .with_interval(10)
                .with_slide_count(5);
            let mut autoplay = AutoPlay::new(base.clone().with_index(Some(0)), &mut timers);
            for _ in 0..256 {
                let fired = timers.advance_by(10);
                for id in fired {
                    if let Some((next, _)) = autoplay.on_tick(id, &mut ()) {
                        let accepted = base.clone().with_index(Some(next));
                        autoplay.set_config(accepted, &mut timers);
                        autoplay.on_switching(next, SwitchPhase::Move, &mut timers, &mut ());
                        autoplay.on_switching(next, SwitchPhase::End, &mut timers, &mut ());
                    }
                }
            }
            black_box(autoplay.index());
            autoplay.dispose(&mut timers);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick_throughput, bench_restart_churn);
criterion_main!(benches);
