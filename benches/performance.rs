use std::sync::Arc;

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use parking_ledger::parking::{calculate_fee, ManualClock, ParkingLedger, Vehicle, VehicleClass};

fn full_ledger(capacity: usize) -> ParkingLedger {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 6, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let mut ledger = ParkingLedger::with_capacity(capacity).with_clock(clock.clone());
    for idx in 0..capacity {
        let class = VehicleClass::ALL[idx % VehicleClass::ALL.len()];
        let mut vehicle = Vehicle::new(format!("BENCH{idx:05}"), class).checked_in_at(start);
        if idx % 3 == 0 {
            vehicle = vehicle.with_discount_card("CARD");
        }
        ledger.check_in(vehicle).expect("room for bench vehicle");
    }
    clock.advance_minutes(200);
    ledger
}

fn bench_fee(c: &mut Criterion) {
    c.bench_function("calculate_fee_sweep", |b| {
        b.iter(|| {
            let mut total = 0;
            for minutes in 0..1_440 {
                total += calculate_fee(black_box(VehicleClass::MiniBus), minutes, minutes % 2 == 0);
            }
            total
        })
    });
}

fn bench_checkout_churn(c: &mut Criterion) {
    c.bench_function("check_out_10k", |b| {
        b.iter_batched(
            || full_ledger(10_000),
            |mut ledger| {
                for idx in 0..10_000 {
                    let _ = ledger.check_out(&format!("BENCH{idx:05}"));
                }
                ledger.earnings_summary()
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_fee, bench_checkout_churn);
criterion_main!(benches);
