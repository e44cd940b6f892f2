//! Replays the reference scenario: a full lot, a rejected arrival, a few
//! check-outs and the resulting earnings.

use chrono::{DateTime, Utc};

use crate::parking::{ParkingLedger, Vehicle, VehicleClass};

use super::{output, render};

const SAMPLE_FLEET: [(&str, VehicleClass, Option<&str>); 20] = [
    ("AA111AA", VehicleClass::Car, Some("DISCOUNT_CARD_001")),
    ("B222BBB", VehicleClass::Motorcycle, None),
    ("CC333CC", VehicleClass::MiniBus, None),
    ("DD444DD", VehicleClass::Bus, Some("DISCOUNT_CARD_002")),
    ("AA111BB", VehicleClass::Car, Some("DISCOUNT_CARD_003")),
    ("B222CCC", VehicleClass::Motorcycle, Some("DISCOUNT_CARD_004")),
    ("CC333DD", VehicleClass::MiniBus, None),
    ("DD444EE", VehicleClass::Bus, Some("DISCOUNT_CARD_005")),
    ("AA111CC", VehicleClass::Car, None),
    ("B222DDD", VehicleClass::Motorcycle, None),
    ("CC333EE", VehicleClass::MiniBus, None),
    ("DD444GG", VehicleClass::Bus, Some("DISCOUNT_CARD_006")),
    ("AA111DD", VehicleClass::Car, Some("DISCOUNT_CARD_007")),
    ("B222EEE", VehicleClass::Motorcycle, None),
    ("CC333FF", VehicleClass::MiniBus, None),
    ("DD444HH", VehicleClass::Bus, Some("DISCOUNT_CARD_008")),
    ("AA111EE", VehicleClass::Car, Some("DISCOUNT_CARD_009")),
    ("B222FFF", VehicleClass::Motorcycle, None),
    ("CC333GG", VehicleClass::MiniBus, None),
    ("DD444II", VehicleClass::Bus, Some("DISCOUNT_CARD_010")),
];

/// The twenty sample vehicles, all arriving at `at`.
pub fn sample_fleet(at: DateTime<Utc>) -> Vec<Vehicle> {
    SAMPLE_FLEET
        .iter()
        .map(|(plate, class, card)| {
            let vehicle = Vehicle::new(*plate, *class).checked_in_at(at);
            match card {
                Some(card) => vehicle.with_discount_card(*card),
                None => vehicle,
            }
        })
        .collect()
}

pub fn run(ledger: &mut ParkingLedger) {
    let now = ledger.now();

    output::section("Check-in");
    for vehicle in sample_fleet(now) {
        check_in(ledger, vehicle);
    }

    output::blank_line();
    let overflow = Vehicle::new("AA111AB", VehicleClass::Car)
        .checked_in_at(now)
        .with_discount_card("DISCOUNT_CARD_002");
    check_in(ledger, overflow);

    output::section("Check-out");
    check_out(ledger, "DD444DD");
    output::info(render::earnings_line(&ledger.earnings_summary()));
    check_out(ledger, "DD444DF");
    check_out(ledger, "AA111AA");
    output::info(render::earnings_line(&ledger.earnings_summary()));

    output::section("Plates");
    let mut plates = ledger.parked_plates();
    plates.sort();
    for plate in plates {
        output::info(render::plate_line(&plate));
    }
}

fn check_in(ledger: &mut ParkingLedger, vehicle: Vehicle) {
    match ledger.check_in(vehicle) {
        Ok(()) => output::success(render::CHECK_IN_OK),
        Err(_) => output::error(render::CHECK_IN_FAILED),
    }
}

fn check_out(ledger: &mut ParkingLedger, plate: &str) {
    match ledger.check_out(plate) {
        Ok(receipt) => output::success(render::fee_message(&receipt)),
        Err(_) => output::error(render::CHECK_OUT_FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parking::{EarningsSummary, ManualClock};
    use chrono::TimeZone;
    use std::sync::Arc;

    #[test]
    fn fleet_plates_are_unique() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let fleet = sample_fleet(at);
        let mut plates: Vec<_> = fleet.iter().map(|v| v.plate().to_string()).collect();
        plates.sort();
        plates.dedup();
        assert_eq!(plates.len(), 20);
    }

    #[test]
    fn demo_books_two_discounted_checkouts() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let mut ledger =
            ParkingLedger::with_capacity(20).with_clock(Arc::new(ManualClock::new(at)));
        run(&mut ledger);

        // Bus with card: 30 * 0.85 = 25; car with card: 20 * 0.85 = 17
        assert_eq!(
            ledger.earnings_summary(),
            EarningsSummary {
                completed_checkouts: 2,
                total_earnings: 42,
            }
        );
        assert_eq!(ledger.occupancy(), 18);
        assert!(!ledger.is_parked("AA111AB"));
    }
}
