//! Plain-text renderings of ledger outcomes, kept free of styling so they can be asserted on.

use crate::parking::{CheckOutReceipt, EarningsSummary, FeePolicy, ParkingLedger};

pub const CHECK_IN_OK: &str = "Welcome to AlkeParking!";
pub const CHECK_IN_FAILED: &str = "Sorry, the check-in failed";
pub const CHECK_OUT_FAILED: &str = "Sorry, the check-out failed";

pub fn fee_message(receipt: &CheckOutReceipt) -> String {
    format!("Your fee is {}. Come back soon.", receipt.fee)
}

pub fn receipt_details(receipt: &CheckOutReceipt) -> String {
    let discount = if receipt.discounted {
        ", discount applied"
    } else {
        ""
    };
    format!(
        "{} ({}) parked {} min{}",
        receipt.plate, receipt.class, receipt.parked_minutes, discount
    )
}

pub fn earnings_line(summary: &EarningsSummary) -> String {
    format!(
        "{} vehicles have checked out and have earnings of ${}",
        summary.completed_checkouts, summary.total_earnings
    )
}

pub fn plate_line(plate: &str) -> String {
    format!("Vehicle: {plate}")
}

pub fn occupancy_line(ledger: &ParkingLedger) -> String {
    format!(
        "Occupancy: {}/{} ({} free)",
        ledger.occupancy(),
        ledger.capacity(),
        ledger.available_spaces()
    )
}

pub fn policy_lines(capacity: usize, policy: &FeePolicy) -> Vec<String> {
    vec![
        format!("capacity         = {capacity}"),
        format!("free_minutes     = {}", policy.free_minutes),
        format!("block_minutes    = {}", policy.block_minutes),
        format!("block_surcharge  = {}", policy.block_surcharge),
        format!("discount_percent = {}", policy.discount_percent),
    ]
}
