use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use chrono::{DateTime, Utc};

use crate::errors::UnknownVehicleClass;

/// Supported vehicle classes. Each maps to a fixed base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    Car = 0,
    Motorcycle = 1,
    MiniBus = 2,
    Bus = 3,
}

/// Base rate per class, indexed by discriminant.
const BASE_RATES: [u64; 4] = [20, 15, 25, 30];

impl VehicleClass {
    pub const ALL: [VehicleClass; 4] = [
        VehicleClass::Car,
        VehicleClass::Motorcycle,
        VehicleClass::MiniBus,
        VehicleClass::Bus,
    ];

    /// Fee covering the free allowance, in currency units.
    pub fn base_rate(self) -> u64 {
        BASE_RATES[self as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleClass::Car => "Car",
            VehicleClass::Motorcycle => "Motorcycle",
            VehicleClass::MiniBus => "MiniBus",
            VehicleClass::Bus => "Bus",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleClass {
    type Err = UnknownVehicleClass;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "car" => Ok(VehicleClass::Car),
            "motorcycle" | "moto" => Ok(VehicleClass::Motorcycle),
            "minibus" => Ok(VehicleClass::MiniBus),
            "bus" => Ok(VehicleClass::Bus),
            _ => Err(UnknownVehicleClass(raw.to_string())),
        }
    }
}

/// A vehicle presented at the gate.
///
/// Identity is the plate alone: two vehicles with the same plate compare equal
/// whatever their class, card or check-in time. Parked time is never stored;
/// it is derived from `checked_in_at` whenever it is read.
#[derive(Debug, Clone)]
pub struct Vehicle {
    plate: String,
    class: VehicleClass,
    checked_in_at: DateTime<Utc>,
    discount_card: Option<String>,
}

impl Vehicle {
    /// Creates a vehicle stamped with the current system time.
    pub fn new(plate: impl Into<String>, class: VehicleClass) -> Self {
        Self {
            plate: plate.into(),
            class,
            checked_in_at: Utc::now(),
            discount_card: None,
        }
    }

    pub fn with_discount_card(mut self, card: impl Into<String>) -> Self {
        self.discount_card = Some(card.into());
        self
    }

    pub fn checked_in_at(mut self, at: DateTime<Utc>) -> Self {
        self.checked_in_at = at;
        self
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn class(&self) -> VehicleClass {
        self.class
    }

    pub fn check_in_time(&self) -> DateTime<Utc> {
        self.checked_in_at
    }

    pub fn discount_card(&self) -> Option<&str> {
        self.discount_card.as_deref()
    }

    /// Presence of a card grants the discount; its value is irrelevant.
    pub fn has_discount(&self) -> bool {
        self.discount_card.is_some()
    }

    /// Whole minutes elapsed between check-in and `now`, never negative.
    pub fn parked_minutes(&self, now: DateTime<Utc>) -> u64 {
        let elapsed = (now - self.checked_in_at).num_minutes();
        u64::try_from(elapsed).unwrap_or_else(|_| {
            tracing::warn!(
                plate = %self.plate,
                checked_in_at = %self.checked_in_at,
                %now,
                "clock is behind check-in time; counting zero minutes"
            );
            0
        })
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn base_rates_follow_class_table() {
        assert_eq!(VehicleClass::Car.base_rate(), 20);
        assert_eq!(VehicleClass::Motorcycle.base_rate(), 15);
        assert_eq!(VehicleClass::MiniBus.base_rate(), 25);
        assert_eq!(VehicleClass::Bus.base_rate(), 30);
    }

    #[test]
    fn parses_class_names_loosely() {
        assert_eq!("car".parse::<VehicleClass>(), Ok(VehicleClass::Car));
        assert_eq!("Mini-Bus".parse::<VehicleClass>(), Ok(VehicleClass::MiniBus));
        assert_eq!("MINIBUS".parse::<VehicleClass>(), Ok(VehicleClass::MiniBus));
        assert_eq!(" bus ".parse::<VehicleClass>(), Ok(VehicleClass::Bus));
        assert_eq!(
            "truck".parse::<VehicleClass>(),
            Err(UnknownVehicleClass("truck".into()))
        );
    }

    #[test]
    fn equality_is_by_plate_only() {
        let a = Vehicle::new("AA111AA", VehicleClass::Car);
        let b = Vehicle::new("AA111AA", VehicleClass::Bus).with_discount_card("CARD");
        let c = Vehicle::new("aa111aa", VehicleClass::Car);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn parked_minutes_counts_whole_minutes() {
        let vehicle = Vehicle::new("B222BBB", VehicleClass::Motorcycle).checked_in_at(noon());
        assert_eq!(vehicle.parked_minutes(noon()), 0);
        assert_eq!(vehicle.parked_minutes(noon() + Duration::seconds(59)), 0);
        assert_eq!(vehicle.parked_minutes(noon() + Duration::seconds(121)), 2);
        assert_eq!(vehicle.parked_minutes(noon() - Duration::minutes(5)), 0);
    }

    #[test]
    fn discount_depends_on_card_presence() {
        let plain = Vehicle::new("CC333CC", VehicleClass::MiniBus);
        let carded = plain.clone().with_discount_card("");
        assert!(!plain.has_discount());
        assert!(carded.has_discount());
    }
}
