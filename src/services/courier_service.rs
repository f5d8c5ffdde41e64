// src/services/courier_service.rs
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::domain::{validate_courier, CourierRecord, CourierStatus};
use crate::error::{AppError, AppResult};
use crate::events::{CourierBooked, CourierStatusUpdated, EventBus};
use crate::store::CourierStore;

/// Raw field values for one booking, exactly as the caller collected them.
/// Mode arrives as text; parsing it is part of booking.
#[derive(Debug, Clone)]
pub struct BookCourierRequest {
    pub courier_id: u32,
    pub sender: String,
    pub receiver: String,
    pub weight_kg: f64,
    pub mode: String,
}

/// Orchestrates booking, status tracking and reporting over the store.
///
/// The store sits behind a lock so the capacity check and the append are one
/// atomic step, and list snapshots are consistent, even if the service is
/// ever shared across threads.
pub struct CourierService {
    store: Mutex<CourierStore>,
    event_bus: Arc<EventBus>,
}

impl CourierService {
    pub fn new(store: CourierStore, event_bus: Arc<EventBus>) -> Self {
        Self {
            store: Mutex::new(store),
            event_bus,
        }
    }

    /// Validate, store and announce a new booking.
    ///
    /// Returns the stored record so the caller can show the computed charges.
    pub fn book_courier(&self, request: BookCourierRequest) -> AppResult<CourierRecord> {
        let courier = CourierRecord::new(
            request.courier_id,
            request.sender,
            request.receiver,
            request.weight_kg,
            &request.mode,
        )?;
        validate_courier(&courier)?;

        {
            let mut store = self.store.lock().unwrap();
            store.append(courier.clone())?;
        }

        info!(
            courier_id = courier.courier_id,
            mode = %courier.mode,
            charges = courier.charges,
            "courier booked"
        );
        self.event_bus.emit(CourierBooked::new(
            courier.courier_id,
            courier.mode,
            courier.charges,
        ));

        Ok(courier)
    }

    /// Move the first courier with `courier_id` to the status named by
    /// `status_text`. Returns the new status.
    pub fn update_status(&self, courier_id: u32, status_text: &str) -> AppResult<CourierStatus> {
        let (from, to) = {
            let mut store = self.store.lock().unwrap();
            let courier = store.get_mut_by_id(courier_id).ok_or(AppError::NotFound)?;
            let from = courier.update_status(status_text)?;
            (from, courier.status)
        };

        info!(courier_id, from = %from, to = %to, "status updated");
        self.event_bus
            .emit(CourierStatusUpdated::new(courier_id, from, to));

        Ok(to)
    }

    /// Snapshot of every stored record, in insertion order.
    pub fn list_couriers(&self) -> Vec<CourierRecord> {
        self.store.lock().unwrap().iter().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.store.lock().unwrap().len()
    }

    pub fn capacity(&self) -> usize {
        self.store.lock().unwrap().capacity()
    }

    pub fn is_full(&self) -> bool {
        self.store.lock().unwrap().is_full()
    }
}
