use serde::{Deserialize, Serialize};

use super::vehicle::VehicleClass;

const DEFAULT_FREE_MINUTES: u64 = 120;
const DEFAULT_BLOCK_MINUTES: u64 = 15;
const DEFAULT_BLOCK_SURCHARGE: u64 = 5;
const DEFAULT_DISCOUNT_PERCENT: u64 = 15;

/// Overtime and discount rules applied on top of a class base rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeePolicy {
    /// Minutes covered by the base rate.
    pub free_minutes: u64,
    /// Length of one overtime block; a started block is charged in full.
    pub block_minutes: u64,
    /// Charge per overtime block.
    pub block_surcharge: u64,
    /// Reduction granted to discount-card holders, applied once to the total.
    pub discount_percent: u64,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            free_minutes: DEFAULT_FREE_MINUTES,
            block_minutes: DEFAULT_BLOCK_MINUTES,
            block_surcharge: DEFAULT_BLOCK_SURCHARGE,
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
        }
    }
}

impl FeePolicy {
    pub fn overtime_surcharge(&self, parked_minutes: u64) -> u64 {
        if parked_minutes <= self.free_minutes || self.block_minutes == 0 {
            return 0;
        }
        let overtime = parked_minutes - self.free_minutes;
        overtime
            .div_ceil(self.block_minutes)
            .saturating_mul(self.block_surcharge)
    }

    /// Computes the fee for one stay. Pure; never fails.
    pub fn calculate(&self, class: VehicleClass, parked_minutes: u64, has_discount: bool) -> u64 {
        let mut fee = class
            .base_rate()
            .saturating_add(self.overtime_surcharge(parked_minutes));
        if has_discount {
            // integer floor of fee * (1 - pct/100); widened so the product cannot overflow
            let kept = u128::from(100 - self.discount_percent.min(100));
            fee = u64::try_from(u128::from(fee) * kept / 100).unwrap_or(fee);
        }
        tracing::debug!(%class, parked_minutes, has_discount, fee, "fee computed");
        fee
    }
}

/// Fee under the default policy.
pub fn calculate_fee(class: VehicleClass, parked_minutes: u64, has_discount: bool) -> u64 {
    FeePolicy::default().calculate(class, parked_minutes, has_discount)
}
