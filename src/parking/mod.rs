//! Parking domain: vehicles, the fee policy, and the ledger that admits and charges them.

pub mod clock;
pub mod fee;
pub mod ledger;
pub mod shared;
pub mod vehicle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fee::{calculate_fee, FeePolicy};
pub use ledger::{CheckOutReceipt, EarningsSummary, ParkingLedger, DEFAULT_CAPACITY};
pub use shared::SharedLedger;
pub use vehicle::{Vehicle, VehicleClass};
