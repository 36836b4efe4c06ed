//! Progress Tracking
//!
//! Topic and section completion, the derived percentage, and the one-time
//! celebration, persisted through a key/value store.

#![warn(missing_docs)]

pub mod config;
pub mod tracker;
pub mod view;

pub use config::TrackerConfig;
pub use tracker::{Handled, MarkOutcome, ProgressTracker, SectionSwitch};
pub use view::{NullView, ViewEvent, ViewSync};
