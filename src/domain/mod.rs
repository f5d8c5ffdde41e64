// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod courier;
pub mod rates;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Courier Domain
pub use courier::{validate_courier, CourierRecord, CourierStatus, TransportMode, MAX_WEIGHT_KG};

// Rate table
pub use rates::rate_per_kg;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Transport mode \"{0}\" is not available")]
    InvalidTransportMode(String),

    #[error("Invalid weight {value} kg: {reason}")]
    InvalidWeight { value: f64, reason: &'static str },

    #[error("Invalid status \"{0}\". Valid: BOOKED, IN_TRANSIT, DELIVERED")]
    InvalidStatus(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
