use super::BlobStore;
use crate::error::{InnovationError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory blob store for testing.
///
/// Uses `RefCell` since the app is single-threaded, which keeps the
/// `BlobStore` trait on `&self`.
#[derive(Default)]
pub struct MemBlobStore {
    blobs: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob directly, bypassing write accounting.
    pub fn with_blob(self, key: &str, blob: &str) -> Self {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl BlobStore for MemBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(InnovationError::Store("Simulated write error".to_string()));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
