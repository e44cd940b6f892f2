use thiserror::Error;

/// Failures reported by ledger operations. Both are expected, user-facing outcomes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParkingError {
    #[error("Admission rejected for vehicle `{0}`")]
    AdmissionRejected(String),
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),
}

pub type ParkingResult<T> = Result<T, ParkingError>;

/// Raised when a vehicle class name does not match any supported class.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown vehicle class `{0}` (expected car, motorcycle, minibus or bus)")]
pub struct UnknownVehicleClass(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_class_message_lists_supported_classes() {
        let err = UnknownVehicleClass("truck".into());
        assert_eq!(
            err.to_string(),
            "unknown vehicle class `truck` (expected car, motorcycle, minibus or bus)"
        );
    }
}
