//! Storage abstraction and implementations for Sejarah.
//!
//! A synchronous string key/value trait in the shape of browser local
//! storage, a volatile and a JSON-file backend, and the [`StoreAdapter`]
//! that absorbs backend faults.

#![warn(missing_docs)]

pub mod adapter;
#[cfg(feature = "json")]
pub mod json_storage;
pub mod memory;
pub mod trait_;

pub use adapter::StoreAdapter;
#[cfg(feature = "json")]
pub use json_storage::JsonFileStore;
pub use memory::MemoryStore;
pub use trait_::{KeyValueStore, Result, StorageError};
