use parking_ledger::parking::{calculate_fee, FeePolicy, VehicleClass};

#[test]
fn car_overtime_boundaries() {
    assert_eq!(calculate_fee(VehicleClass::Car, 120, false), 20);
    assert_eq!(calculate_fee(VehicleClass::Car, 121, false), 25);
    assert_eq!(calculate_fee(VehicleClass::Car, 135, false), 25);
    assert_eq!(calculate_fee(VehicleClass::Car, 136, false), 30);
}

#[test]
fn bus_discount_truncates() {
    assert_eq!(calculate_fee(VehicleClass::Bus, 120, true), 25);
}

#[test]
fn fee_never_decreases_with_time() {
    for class in VehicleClass::ALL {
        for has_discount in [false, true] {
            let mut previous = 0;
            for minutes in 0..=600 {
                let fee = calculate_fee(class, minutes, has_discount);
                assert!(
                    fee >= previous,
                    "{class} discount={has_discount}: fee dropped at {minutes} min"
                );
                previous = fee;
            }
        }
    }
}

#[test]
fn discount_never_costs_more() {
    for class in VehicleClass::ALL {
        for minutes in (0..=480).step_by(7) {
            assert!(calculate_fee(class, minutes, true) <= calculate_fee(class, minutes, false));
        }
    }
}

#[test]
fn full_discount_is_free() {
    let policy = FeePolicy {
        discount_percent: 100,
        ..FeePolicy::default()
    };
    assert_eq!(policy.calculate(VehicleClass::MiniBus, 500, true), 0);
    assert_eq!(policy.calculate(VehicleClass::MiniBus, 500, false), 25 + 26 * 5);
}
