// src/lib.rs
// CourierHub - Interactive courier booking and tracking desk
//
// Architecture:
// - Domain-centric: all business rules live in the domain layer
// - Event-driven: services announce facts through a synchronous bus
// - Explicit: no implicit behavior, no magic
// - In-memory: nothing outlives the session

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod application;
pub mod domain;
pub mod error;
pub mod events;
pub mod services;
pub mod store;

// ============================================================================
// PUBLIC API - Domain (Sealed)
// ============================================================================

pub use domain::{
    rate_per_kg,
    validate_courier,
    CourierRecord,
    CourierStatus,
    DomainError,
    DomainResult,
    TransportMode,
    MAX_WEIGHT_KG,
};

// ============================================================================
// PUBLIC API - Infrastructure & Application
// ============================================================================

pub use application::{CourierDto, Session};
pub use error::{AppError, AppResult};
pub use events::{CourierBooked, CourierStatusUpdated, DomainEvent, EventBus};
pub use services::{BookCourierRequest, CourierService};
pub use store::{CourierStore, StoreError, DEFAULT_CAPACITY};
