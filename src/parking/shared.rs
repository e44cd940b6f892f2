use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::errors::ParkingResult;

use super::{
    ledger::{CheckOutReceipt, EarningsSummary, ParkingLedger},
    vehicle::Vehicle,
};

/// Thread-safe handle over a single [`ParkingLedger`].
///
/// One lock guards vehicles and statistics together, so admission and
/// check-out each run as a single critical section.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<ParkingLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: ParkingLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn check_in(&self, vehicle: Vehicle) -> ParkingResult<()> {
        self.lock().check_in(vehicle)
    }

    pub fn check_out(&self, plate: &str) -> ParkingResult<CheckOutReceipt> {
        self.lock().check_out(plate)
    }

    pub fn quote(&self, plate: &str) -> ParkingResult<u64> {
        self.lock().quote(plate)
    }

    pub fn earnings_summary(&self) -> EarningsSummary {
        self.lock().earnings_summary()
    }

    pub fn parked_plates(&self) -> Vec<String> {
        self.lock().parked_plates()
    }

    pub fn occupancy(&self) -> usize {
        self.lock().occupancy()
    }

    /// Runs `f` with exclusive access, for callers that need several reads to agree.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&mut ParkingLedger) -> R) -> R {
        f(&mut self.lock())
    }

    // Ledger operations never leave state half-applied, so a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, ParkingLedger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ParkingLedger> for SharedLedger {
    fn from(ledger: ParkingLedger) -> Self {
        Self::new(ledger)
    }
}
