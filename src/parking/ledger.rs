use std::{collections::HashMap, fmt, sync::Arc};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{ParkingError, ParkingResult};

use super::{
    clock::{Clock, SystemClock},
    fee::FeePolicy,
    vehicle::{Vehicle, VehicleClass},
};

pub const DEFAULT_CAPACITY: usize = 20;

/// Aggregates of completed check-outs since the ledger was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarningsSummary {
    pub completed_checkouts: u64,
    pub total_earnings: u64,
}

/// Outcome of a successful check-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutReceipt {
    pub id: Uuid,
    pub plate: String,
    pub class: VehicleClass,
    pub parked_minutes: u64,
    pub discounted: bool,
    pub fee: u64,
    pub checked_out_at: DateTime<Utc>,
}

/// The parking lot's book of record: who is parked, how much room is left,
/// and what has been earned.
///
/// Invariants: occupancy never exceeds `capacity`, plates are unique among
/// parked vehicles, and the earnings summary only changes on a successful
/// check-out.
pub struct ParkingLedger {
    capacity: usize,
    policy: FeePolicy,
    vehicles: HashMap<String, Vehicle>,
    stats: EarningsSummary,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for ParkingLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingLedger")
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .field("occupancy", &self.vehicles.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Default for ParkingLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ParkingLedger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            policy: FeePolicy::default(),
            vehicles: HashMap::new(),
            stats: EarningsSummary::default(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.capacity).with_policy(config.fee_policy)
    }

    pub fn with_policy(mut self, policy: FeePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Admits `vehicle` when there is room and its plate is not already parked.
    ///
    /// Both failure causes are reported as the same
    /// [`ParkingError::AdmissionRejected`]; the concrete reason only goes to the log.
    pub fn check_in(&mut self, vehicle: Vehicle) -> ParkingResult<()> {
        let rejection = if self.vehicles.contains_key(vehicle.plate()) {
            Some("duplicate_plate")
        } else if self.is_full() {
            Some("lot_full")
        } else {
            None
        };
        if let Some(reason) = rejection {
            tracing::warn!(plate = vehicle.plate(), reason, "check-in rejected");
            return Err(ParkingError::AdmissionRejected(vehicle.plate().to_string()));
        }

        tracing::info!(
            plate = vehicle.plate(),
            class = %vehicle.class(),
            occupancy = self.vehicles.len() + 1,
            capacity = self.capacity,
            "vehicle checked in"
        );
        self.vehicles.insert(vehicle.plate().to_string(), vehicle);
        Ok(())
    }

    /// Removes the vehicle parked under `plate`, charges it and books the fee.
    pub fn check_out(&mut self, plate: &str) -> ParkingResult<CheckOutReceipt> {
        let Some(vehicle) = self.vehicles.remove(plate) else {
            tracing::warn!(plate, "check-out for unknown plate");
            return Err(ParkingError::VehicleNotFound(plate.to_string()));
        };

        let now = self.clock.now();
        let parked_minutes = vehicle.parked_minutes(now);
        let discounted = vehicle.has_discount();
        let fee = self
            .policy
            .calculate(vehicle.class(), parked_minutes, discounted);

        self.stats.completed_checkouts = self.stats.completed_checkouts.saturating_add(1);
        self.stats.total_earnings = self.stats.total_earnings.saturating_add(fee);

        tracing::info!(plate, class = %vehicle.class(), parked_minutes, fee, "vehicle checked out");

        Ok(CheckOutReceipt {
            id: Uuid::new_v4(),
            plate: plate.to_string(),
            class: vehicle.class(),
            parked_minutes,
            discounted,
            fee,
            checked_out_at: now,
        })
    }

    /// Fee the vehicle would pay if it checked out now. Does not mutate.
    pub fn quote(&self, plate: &str) -> ParkingResult<u64> {
        let vehicle = self.find(plate)?;
        let minutes = vehicle.parked_minutes(self.clock.now());
        Ok(self
            .policy
            .calculate(vehicle.class(), minutes, vehicle.has_discount()))
    }

    pub fn parked_minutes(&self, plate: &str) -> ParkingResult<u64> {
        Ok(self.find(plate)?.parked_minutes(self.clock.now()))
    }

    pub fn earnings_summary(&self) -> EarningsSummary {
        self.stats
    }

    /// Plates currently parked, in no particular order.
    pub fn parked_plates(&self) -> Vec<String> {
        self.vehicles.keys().cloned().collect()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn vehicle(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.get(plate)
    }

    pub fn is_parked(&self, plate: &str) -> bool {
        self.vehicles.contains_key(plate)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupancy(&self) -> usize {
        self.vehicles.len()
    }

    pub fn available_spaces(&self) -> usize {
        self.capacity.saturating_sub(self.vehicles.len())
    }

    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= self.capacity
    }

    pub fn policy(&self) -> &FeePolicy {
        &self.policy
    }

    /// Current time according to the ledger's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn find(&self, plate: &str) -> ParkingResult<&Vehicle> {
        self.vehicles
            .get(plate)
            .ok_or_else(|| ParkingError::VehicleNotFound(plate.to_string()))
    }
}
