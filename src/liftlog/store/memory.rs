use super::StorageBackend;
use crate::error::{LiftlogError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the tracker is
/// single-threaded; the `StorageBackend` trait takes `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(LiftlogError::Store("Simulated write error".to_string()));
        }
        self.records
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_back_what_was_written() {
        let backend = MemBackend::new();
        backend.write("savedFoods", "[]").unwrap();
        assert_eq!(backend.read("savedFoods").unwrap(), Some("[]".to_string()));
        assert_eq!(backend.read("dailyFoods").unwrap(), None);
    }

    #[test]
    fn simulated_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(backend.write("savedFoods", "[]").is_err());
    }
}
