use super::entity::CourierRecord;
use crate::domain::rates::rate_per_kg;
use crate::domain::{DomainError, DomainResult};

/// Heaviest parcel the desk accepts, in kilograms.
pub const MAX_WEIGHT_KG: f64 = 100.0;

/// Validates all CourierRecord invariants
/// These are the absolute rules that must hold for a record to be stored
pub fn validate_courier(courier: &CourierRecord) -> DomainResult<()> {
    validate_parties(courier)?;
    validate_weight(courier.weight_kg)?;
    validate_charges(courier)?;
    Ok(())
}

/// Sender and receiver cannot be blank
fn validate_parties(courier: &CourierRecord) -> DomainResult<()> {
    if courier.sender.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Sender name cannot be empty".to_string(),
        ));
    }
    if courier.receiver.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Receiver name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Weight must sit in (0, 100] kg
pub fn validate_weight(weight_kg: f64) -> DomainResult<()> {
    // Written as a negated `>` so NaN lands in the first branch too.
    if !(weight_kg > 0.0) {
        return Err(DomainError::InvalidWeight {
            value: weight_kg,
            reason: "must be greater than 0",
        });
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(DomainError::InvalidWeight {
            value: weight_kg,
            reason: "exceeds 100 kg limit",
        });
    }
    Ok(())
}

/// Charges are copied from booking, never re-derived, so exact equality is
/// the right comparison.
fn validate_charges(courier: &CourierRecord) -> DomainResult<()> {
    let expected = courier.weight_kg * rate_per_kg(courier.mode);
    if courier.charges != expected {
        return Err(DomainError::InvariantViolation(format!(
            "Charges {} do not match {} kg at the {} rate",
            courier.charges, courier.weight_kg, courier.mode
        )));
    }
    Ok(())
}

/// Critical Courier Invariants:
///
/// 1. Weight is strictly positive and at most 100 kg
/// 2. Transport mode is one of the four enumerated values
/// 3. Every new record starts BOOKED
/// 4. Charges equal weight times the mode rate, fixed at booking
/// 5. Status transitions never alter charges
/// 6. Sender and receiver are non-blank
/// 7. courier_id, weight and mode are immutable after booking
/// 8. Booking timestamp never changes; updated timestamp tracks transitions
