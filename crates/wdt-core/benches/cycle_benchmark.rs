//! Per-cycle and register-access cost benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wdt_core::prelude::*;

fn running_core(countdown: u32) -> WatchdogCore {
    let mut core = WatchdogCore::new();
    core.write(RegisterAccess::new(Register::Countdown, AccessWidth::Word), countdown);
    core.write(RegisterAccess::new(Register::Start, AccessWidth::Word), 1);
    core
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("tick_running", |b| {
        let mut core = running_core(u32::MAX);
        b.iter(|| black_box(core.tick()));
    });

    group.bench_function("tick_idle", |b| {
        let mut core = WatchdogCore::new();
        b.iter(|| black_box(core.tick()));
    });

    group.bench_function("tick_expired", |b| {
        let mut core = running_core(1);
        core.tick();
        b.iter(|| black_box(core.tick()));
    });

    group.finish();
}

fn bench_register_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_access");
    let tap = RegisterAccess::new(Register::Tap, AccessWidth::Word);
    let status = RegisterAccess::new(Register::Status, AccessWidth::Word);

    group.bench_function("tap_valid", |b| {
        let mut core = running_core(1000);
        b.iter(|| core.write(tap, black_box(TAP_CODE)));
    });

    group.bench_function("tap_invalid", |b| {
        let mut core = running_core(1000);
        b.iter(|| core.write(tap, black_box(0x1234)));
    });

    group.bench_function("status_read", |b| {
        let core = running_core(1000);
        b.iter(|| black_box(core.read(status)));
    });

    for width in [AccessWidth::Byte, AccessWidth::HalfWord, AccessWidth::Word] {
        group.bench_with_input(
            BenchmarkId::new("countdown_write", width),
            &width,
            |b, &width| {
                let mut core = WatchdogCore::new();
                let access = RegisterAccess::new(Register::Countdown, width);
                b.iter(|| core.write(access, black_box(0xA5A5_A5A5)));
            },
        );
    }

    group.finish();
}

fn bench_bus(c: &mut Criterion) {
    let mut group = c.benchmark_group("bus");

    for layout in [AddressLayout::Compact, AddressLayout::WordAligned] {
        let config = WatchdogConfig::new(layout);
        let tap_address = layout.address_of(Register::Tap);
        group.bench_with_input(
            BenchmarkId::new("clock_with_tap", format!("{layout:?}")),
            &config,
            |b, config| {
                let mut wdt = WatchdogPeripheral::new(*config)
                    .unwrap_or_else(|_err| WatchdogPeripheral::with_default_config());
                b.iter(|| black_box(wdt.clock_with_write(tap_address, AccessWidth::Word, TAP_CODE)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_register_access, bench_bus);
criterion_main!(benches);
