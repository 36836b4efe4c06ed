//! Fault-absorbing front for a [`KeyValueStore`].
//!
//! Progress must never halt the learner, so every backend failure stops here:
//! it is logged as a warning and the call degrades to "absent" or "no-op".

use super::KeyValueStore;

/// Store adapter that never returns an error.
#[derive(Debug)]
pub struct StoreAdapter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreAdapter<S> {
    /// Wrap a backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read a value; `None` when absent or unreadable.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed");
                None
            }
        }
    }

    /// Write a value. Returns whether the write landed.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match self.store.set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage write failed");
                false
            }
        }
    }

    /// Delete a key. Returns whether the delete landed.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.store.remove(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage delete failed");
                false
            }
        }
    }

    /// Unwrap the backend.
    pub fn into_inner(self) -> S {
        self.store
    }
}
