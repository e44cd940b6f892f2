mod common;

use std::collections::HashSet;

use common::{arriving, ledger_with_clock};
use parking_ledger::parking::{EarningsSummary, VehicleClass};
use parking_ledger::ParkingError;

#[test]
fn capacity_plus_one_is_rejected() {
    let (mut ledger, _) = ledger_with_clock(20);
    for idx in 0..20 {
        let vehicle = arriving(&ledger, &format!("PL{idx:03}"), VehicleClass::Car);
        ledger.check_in(vehicle).expect("room available");
        assert!(ledger.occupancy() <= ledger.capacity());
    }

    let overflow = arriving(&ledger, "PL999", VehicleClass::Car);
    assert_eq!(
        ledger.check_in(overflow),
        Err(ParkingError::AdmissionRejected("PL999".into()))
    );
    assert_eq!(ledger.occupancy(), 20);
    assert!(ledger.is_full());
}

#[test]
fn plates_are_case_sensitive() {
    let (mut ledger, _) = ledger_with_clock(3);
    ledger
        .check_in(arriving(&ledger, "abc123", VehicleClass::Car))
        .expect("lowercase");
    ledger
        .check_in(arriving(&ledger, "ABC123", VehicleClass::Car))
        .expect("uppercase is a different plate");
    assert_eq!(ledger.occupancy(), 2);
}

#[test]
fn checkout_cannot_be_repeated() {
    let (mut ledger, clock) = ledger_with_clock(4);
    ledger
        .check_in(arriving(&ledger, "CC333CC", VehicleClass::MiniBus))
        .expect("admitted");
    clock.advance_minutes(45);

    let receipt = ledger.check_out("CC333CC").expect("first check-out");
    assert_eq!(receipt.fee, 25);
    assert_eq!(
        ledger.check_out("CC333CC"),
        Err(ParkingError::VehicleNotFound("CC333CC".into()))
    );
    assert_eq!(ledger.earnings_summary().completed_checkouts, 1);
}

#[test]
fn earnings_accumulate_across_checkouts() {
    let (mut ledger, clock) = ledger_with_clock(5);
    ledger
        .check_in(arriving(&ledger, "CAR-1", VehicleClass::Car))
        .expect("car");
    ledger
        .check_in(arriving(&ledger, "BUS-1", VehicleClass::Bus))
        .expect("bus");

    clock.advance_minutes(121);
    assert_eq!(ledger.check_out("CAR-1").expect("car out").fee, 25);
    assert_eq!(ledger.check_out("BUS-1").expect("bus out").fee, 35);

    assert_eq!(
        ledger.earnings_summary(),
        EarningsSummary {
            completed_checkouts: 2,
            total_earnings: 60,
        }
    );
}

#[test]
fn failed_operations_do_not_touch_stats() {
    let (mut ledger, _) = ledger_with_clock(1);
    ledger
        .check_in(arriving(&ledger, "ONLY", VehicleClass::Car))
        .expect("admitted");
    let _ = ledger.check_in(arriving(&ledger, "ONLY", VehicleClass::Car));
    let _ = ledger.check_in(arriving(&ledger, "OTHER", VehicleClass::Car));
    let _ = ledger.check_out("MISSING");
    assert_eq!(ledger.earnings_summary(), EarningsSummary::default());
    assert_eq!(ledger.occupancy(), 1);
}

#[test]
fn listing_reflects_current_occupants() {
    let (mut ledger, _) = ledger_with_clock(5);
    for plate in ["AA111AA", "B222BBB", "CC333CC"] {
        ledger
            .check_in(arriving(&ledger, plate, VehicleClass::Car))
            .expect("admitted");
    }
    ledger.check_out("B222BBB").expect("checked out");

    let plates: HashSet<String> = ledger.parked_plates().into_iter().collect();
    let expected: HashSet<String> = ["AA111AA", "CC333CC"].map(String::from).into();
    assert_eq!(plates, expected);
}

#[test]
fn single_space_lot_end_to_end() {
    let (mut ledger, _) = ledger_with_clock(1);

    ledger
        .check_in(arriving(&ledger, "X", VehicleClass::Motorcycle))
        .expect("X admitted");
    assert!(ledger.check_in(arriving(&ledger, "Y", VehicleClass::Car)).is_err());

    let receipt = ledger.check_out("X").expect("X leaves");
    assert_eq!(receipt.parked_minutes, 0);
    assert_eq!(receipt.fee, VehicleClass::Motorcycle.base_rate());

    ledger
        .check_in(arriving(&ledger, "Y", VehicleClass::Car))
        .expect("Y admitted once there is room");
    assert_eq!(ledger.parked_plates(), vec!["Y".to_string()]);
}
