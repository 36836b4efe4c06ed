//! Sejarah core data models.
//!
//! The fixed learning catalog plus the small value types the progress
//! tracker works with: completion sets, derived snapshots and session state.

#![warn(missing_docs)]

pub mod catalog;
mod completion;
mod error;
mod session;
mod snapshot;

pub use catalog::{is_section, is_topic, topic, Topic, SECTIONS, TOPICS, TOTAL_TOPICS};
pub use completion::CompletionSet;
pub use error::ValidationError;
pub use session::SessionState;
pub use snapshot::ProgressSnapshot;
