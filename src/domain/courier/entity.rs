use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::courier::invariants::validate_weight;
use crate::domain::rates::rate_per_kg;
use crate::domain::{DomainError, DomainResult};

/// Represents one shipment booked at the desk
/// This is the root entity for all courier-related data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierRecord {
    /// Caller-supplied identifier. Ids are labels, not keys: uniqueness is
    /// not enforced.
    pub courier_id: u32,

    /// Who hands the parcel in
    pub sender: String,

    /// Who the parcel is addressed to
    pub receiver: String,

    /// Parcel weight in kilograms. Immutable after booking.
    pub weight_kg: f64,

    /// How the parcel travels. Immutable after booking.
    pub mode: TransportMode,

    /// Delivery lifecycle marker
    pub status: CourierStatus,

    /// Shipping charge, fixed at booking from weight and the mode rate.
    /// Never recomputed, status changes do not touch it.
    pub charges: f64,

    /// Booking timestamp
    pub booked_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// How a parcel travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Train,
    Car,
    Flight,
    Ship,
}

/// Delivery lifecycle of a courier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourierStatus {
    Booked,
    InTransit,
    Delivered,
}

impl CourierRecord {
    /// Book a new courier. This is the only way to construct a valid record.
    ///
    /// Validation order is fixed: transport mode first, then weight, so the
    /// first failure is the one reported. Construction is atomic; no
    /// partially built record ever escapes.
    pub fn new(
        courier_id: u32,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        weight_kg: f64,
        mode_text: &str,
    ) -> DomainResult<Self> {
        let mode = mode_text.parse::<TransportMode>()?;
        validate_weight(weight_kg)?;

        let now = Utc::now();
        Ok(Self {
            courier_id,
            sender: sender.into(),
            receiver: receiver.into(),
            weight_kg,
            mode,
            status: CourierStatus::Booked,
            charges: weight_kg * rate_per_kg(mode),
            booked_at: now,
            updated_at: now,
        })
    }

    /// Replace the delivery status.
    ///
    /// Any status may follow any other, including a no-op transition to the
    /// current one. On an unrecognized status text the record is left
    /// unchanged. Charges are never touched here.
    ///
    /// Returns the status that was replaced.
    pub fn update_status(&mut self, status_text: &str) -> DomainResult<CourierStatus> {
        let next = status_text.parse::<CourierStatus>()?;
        let previous = self.status;
        self.status = next;
        self.updated_at = Utc::now();
        Ok(previous)
    }
}

impl FromStr for TransportMode {
    type Err = DomainError;

    /// Case-insensitive match against the canonical tokens, surrounding
    /// whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRAIN" => Ok(TransportMode::Train),
            "CAR" => Ok(TransportMode::Car),
            "FLIGHT" => Ok(TransportMode::Flight),
            "SHIP" => Ok(TransportMode::Ship),
            _ => Err(DomainError::InvalidTransportMode(s.trim().to_string())),
        }
    }
}

impl FromStr for CourierStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BOOKED" => Ok(CourierStatus::Booked),
            "IN_TRANSIT" => Ok(CourierStatus::InTransit),
            "DELIVERED" => Ok(CourierStatus::Delivered),
            _ => Err(DomainError::InvalidStatus(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportMode::Train => write!(f, "TRAIN"),
            TransportMode::Car => write!(f, "CAR"),
            TransportMode::Flight => write!(f, "FLIGHT"),
            TransportMode::Ship => write!(f, "SHIP"),
        }
    }
}

impl std::fmt::Display for CourierStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourierStatus::Booked => write!(f, "BOOKED"),
            CourierStatus::InTransit => write!(f, "IN_TRANSIT"),
            CourierStatus::Delivered => write!(f, "DELIVERED"),
        }
    }
}
