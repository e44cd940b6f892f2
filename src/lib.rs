#![doc(test(attr(deny(warnings))))]

//! Parking Ledger keeps the book of record for a capacity-bounded parking lot:
//! it admits vehicles, charges them on the way out under a tiered fee policy,
//! and tracks what the lot has earned.
//!
//! ```
//! use parking_ledger::parking::{ParkingLedger, Vehicle, VehicleClass};
//!
//! let mut ledger = ParkingLedger::with_capacity(1);
//! ledger.check_in(Vehicle::new("X", VehicleClass::Car)).unwrap();
//! assert!(ledger.check_in(Vehicle::new("Y", VehicleClass::Car)).is_err());
//!
//! let receipt = ledger.check_out("X").unwrap();
//! assert_eq!(receipt.fee, 20);
//! assert_eq!(ledger.earnings_summary().total_earnings, 20);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod parking;
pub mod utils;

pub use errors::{ParkingError, ParkingResult, UnknownVehicleClass};

/// Initializes global tracing. Safe to call more than once.
pub fn init() {
    utils::init_tracing();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
