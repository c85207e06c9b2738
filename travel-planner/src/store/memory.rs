//! In-memory route store.

use super::{RouteRecord, RouteStore, StoreError};

/// Route store backed by a `Vec`, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryRouteStore {
    records: Vec<RouteRecord>,
    fail_inserts: bool,
}

impl MemoryRouteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<RouteRecord>) -> Self {
        Self {
            records,
            fail_inserts: false,
        }
    }

    /// Make every subsequent insert fail with [`StoreError::Unavailable`].
    pub fn set_fail_inserts(&mut self, fail: bool) {
        self.fail_inserts = fail;
    }

    /// Stored records, in insertion order.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }
}

impl RouteStore for MemoryRouteStore {
    fn load_all_routes(&self) -> Result<Vec<RouteRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn insert_route(&mut self, record: &RouteRecord) -> Result<(), StoreError> {
        if self.fail_inserts {
            return Err(StoreError::Unavailable {
                message: "inserts disabled".to_string(),
            });
        }
        if self.records.iter().any(|r| r.same_key(record)) {
            return Err(record.duplicate_error());
        }
        self.records.push(record.clone());
        Ok(())
    }
}
