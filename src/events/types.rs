// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{CourierStatus, TransportMode};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// Emitted when a courier has been validated and stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierBooked {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub courier_id: u32,
    pub mode: TransportMode,
    pub charges: f64,
}

impl CourierBooked {
    pub fn new(courier_id: u32, mode: TransportMode, charges: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            courier_id,
            mode,
            charges,
        }
    }
}

impl DomainEvent for CourierBooked {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "CourierBooked"
    }
}

/// Emitted after a status transition, carrying both endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierStatusUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub courier_id: u32,
    pub from: CourierStatus,
    pub to: CourierStatus,
}

impl CourierStatusUpdated {
    pub fn new(courier_id: u32, from: CourierStatus, to: CourierStatus) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            courier_id,
            from,
            to,
        }
    }
}

impl DomainEvent for CourierStatusUpdated {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "CourierStatusUpdated"
    }
}
