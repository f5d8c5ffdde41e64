// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are presentation-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::CourierRecord;

/// Flat report row for one courier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierDto {
    pub courier_id: u32,
    pub sender: String,
    pub receiver: String,
    pub weight_kg: f64,
    pub mode: String,
    pub status: String,
    pub charges: f64,
    pub booked_at: String,
    pub updated_at: String,
}

impl From<&CourierRecord> for CourierDto {
    fn from(courier: &CourierRecord) -> Self {
        Self {
            courier_id: courier.courier_id,
            sender: courier.sender.clone(),
            receiver: courier.receiver.clone(),
            weight_kg: courier.weight_kg,
            mode: courier.mode.to_string(),
            status: courier.status.to_string(),
            charges: courier.charges,
            booked_at: courier.booked_at.to_rfc3339(),
            updated_at: courier.updated_at.to_rfc3339(),
        }
    }
}
