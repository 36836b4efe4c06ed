//! Per-load session state.

use serde::{Deserialize, Serialize};

/// Whether the learner has pressed "start" since the page was loaded.
///
/// Never persisted: every load begins in `NotStarted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Fresh load, navigation hidden
    #[default]
    NotStarted,
    /// Navigation revealed, section switching allowed
    Started,
}

impl SessionState {
    /// Whether navigation is unlocked.
    pub fn is_started(self) -> bool {
        matches!(self, SessionState::Started)
    }
}
