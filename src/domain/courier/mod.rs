pub mod entity;
pub mod invariants;

pub use entity::{CourierRecord, CourierStatus, TransportMode};
pub use invariants::{validate_courier, MAX_WEIGHT_KG};
