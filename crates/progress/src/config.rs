//! Tracker configuration.

use std::time::Duration;
use sejarah_core::catalog::SECTION_SEJARAH;

/// Configuration for the progress tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Prefix shared by every persisted key
    pub key_prefix: String,
    /// Delay between the last topic being marked and the celebration firing
    pub celebration_delay: Duration,
    /// Section revealed when the learner starts
    pub initial_section: String,
}

impl TrackerConfig {
    /// Key holding the completed-topic JSON array.
    pub fn topics_key(&self) -> String {
        format!("{}completedTopics", self.key_prefix)
    }

    /// Key holding the completed-section JSON array.
    pub fn sections_key(&self) -> String {
        format!("{}completedSections", self.key_prefix)
    }

    /// Key holding the one-time congratulation flag.
    pub fn congratulated_key(&self) -> String {
        format!("{}congratulated", self.key_prefix)
    }

    /// Every key the tracker writes.
    pub fn keys(&self) -> [String; 3] {
        [self.sections_key(), self.topics_key(), self.congratulated_key()]
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            key_prefix: "islamLearning_".to_string(),
            celebration_delay: Duration::from_millis(500),
            initial_section: SECTION_SEJARAH.to_string(),
        }
    }
}
