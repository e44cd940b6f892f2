#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use parking_ledger::parking::{ManualClock, ParkingLedger, Vehicle, VehicleClass};

pub fn opening_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 7, 30, 0).unwrap()
}

/// Ledger driven by a manual clock that starts at [`opening_time`].
pub fn ledger_with_clock(capacity: usize) -> (ParkingLedger, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(opening_time()));
    let ledger = ParkingLedger::with_capacity(capacity).with_clock(clock.clone());
    (ledger, clock)
}

pub fn arriving(ledger: &ParkingLedger, plate: &str, class: VehicleClass) -> Vehicle {
    Vehicle::new(plate, class).checked_in_at(ledger.now())
}
