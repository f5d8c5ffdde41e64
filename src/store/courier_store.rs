// src/store/courier_store.rs
//
// Bounded in-memory storage for courier records

use thiserror::Error;

use crate::domain::CourierRecord;

/// How many couriers a store accepts unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage full (max {capacity} couriers)")]
    CapacityExceeded { capacity: usize },
}

/// Insertion-ordered collection of courier records with an enforced maximum.
///
/// The capacity check is a precondition of `append`: a full store rejects the
/// record without mutating anything. Records are never removed.
#[derive(Debug)]
pub struct CourierStore {
    records: Vec<CourierRecord>,
    capacity: usize,
}

impl CourierStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A store that holds at most `capacity` records. A capacity of zero is
    /// clamped to one; a store that can hold nothing has no use.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a record at the end, preserving insertion order.
    pub fn append(&mut self, record: CourierRecord) -> Result<(), StoreError> {
        if self.records.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Records in the order they were appended. Every call starts a fresh
    /// traversal from the first record.
    pub fn iter(&self) -> impl Iterator<Item = &CourierRecord> {
        self.records.iter()
    }

    /// First record carrying `courier_id`. Ids are not unique; first match
    /// wins.
    pub fn get_mut_by_id(&mut self, courier_id: u32) -> Option<&mut CourierRecord> {
        self.records.iter_mut().find(|r| r.courier_id == courier_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }
}

impl Default for CourierStore {
    fn default() -> Self {
        Self::new()
    }
}
