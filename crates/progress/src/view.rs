//! Contract between the tracker and the presentation layer.

use sejarah_core::{CompletionSet, ProgressSnapshot};

/// Receives state changes from the tracker and renders them.
///
/// All methods default to doing nothing, so a view only implements what it
/// draws.
pub trait ViewSync {
    /// Progress was loaded: hide every section, re-apply completion badges.
    fn on_restore(
        &mut self,
        _topics: &CompletionSet,
        _sections: &CompletionSet,
        _snapshot: ProgressSnapshot,
    ) {
    }

    /// The learner started: reveal the navigation tabs.
    fn on_session_started(&mut self) {}

    /// Move from the previously shown section (if any) to `to`.
    fn on_section_change(&mut self, _from: Option<&str>, _to: &str) {}

    /// A topic was completed for the first time.
    fn on_topic_marked(&mut self, _topic: &str, _snapshot: ProgressSnapshot) {}

    /// The one-time "all topics complete" notification.
    fn on_all_complete(&mut self) {}
}

/// A view that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl ViewSync for NullView {}

/// User events produced by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A topic card was clicked or keyboard-activated
    TopicActivated(String),
    /// A section tab was pressed
    SectionTabActivated(String),
    /// The "start learning" button was pressed
    LearningStartRequested,
}
