//! Derived progress figures.

use serde::{Deserialize, Serialize};
use crate::catalog::TOTAL_TOPICS;

/// Aggregate completion, derived from the completed-topic set and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Completed topics
    pub completed_count: usize,

    /// Denominator, always [`TOTAL_TOPICS`]
    pub total_topics: usize,

    /// Percentage complete, rounded to the nearest integer (halves round up)
    pub percentage: u32,
}

impl ProgressSnapshot {
    /// Derive a snapshot from a completed-topic count.
    pub fn from_count(completed_count: usize) -> Self {
        let total = TOTAL_TOPICS;
        // round(100 * n / total) in integers, half away from zero.
        let percentage = ((200 * completed_count + total) / (2 * total)) as u32;
        Self {
            completed_count,
            total_topics: total,
            percentage,
        }
    }

    /// Whether every topic has been viewed.
    pub fn is_complete(&self) -> bool {
        self.completed_count >= self.total_topics
    }
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self::from_count(0)
    }
}

impl std::fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}% ({}/{})", self.percentage, self.completed_count, self.total_topics)
    }
}
