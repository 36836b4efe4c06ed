//! Progress tracking service.
//!
//! Owns the two completion sets and the per-load session flag, persists the
//! sets after every mutation and tells the view what changed.
//!
//! ```text
//! restore ─► NotStarted ──start_session──► Started ──switch_section──► Started
//! ```

use std::time::Instant;

use sejarah_core::{
    is_section, topic, CompletionSet, ProgressSnapshot, SessionState, Topic, ValidationError,
};
use sejarah_storage::{KeyValueStore, StoreAdapter};
use tracing::{debug, info, warn};

use crate::config::TrackerConfig;
use crate::view::{ViewEvent, ViewSync};

/// Result of marking a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Newly completed; progress was persisted
    Marked(ProgressSnapshot),
    /// Already complete; nothing changed
    AlreadyComplete(ProgressSnapshot),
}

impl MarkOutcome {
    /// Snapshot after the call.
    pub fn snapshot(&self) -> ProgressSnapshot {
        match self {
            MarkOutcome::Marked(s) | MarkOutcome::AlreadyComplete(s) => *s,
        }
    }

    /// Whether the call changed state.
    pub fn is_new(&self) -> bool {
        matches!(self, MarkOutcome::Marked(_))
    }
}

/// Result of a section switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSwitch {
    /// Learning has not started; nothing changed
    Ignored,
    /// The section is now active
    Switched {
        /// Section shown before the switch
        previous: Option<String>,
    },
}

impl SectionSwitch {
    /// `false` for an ignored request.
    pub fn is_switched(&self) -> bool {
        matches!(self, SectionSwitch::Switched { .. })
    }
}

/// What a dispatched [`ViewEvent`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// A topic was opened; its detail should be displayed
    Topic(&'static Topic, MarkOutcome),
    /// A tab was pressed
    Section(SectionSwitch),
    /// Learning started in the configured initial section
    Started,
}

/// Progress tracker over a key/value store and a view.
pub struct ProgressTracker<S: KeyValueStore, V: ViewSync> {
    store: StoreAdapter<S>,
    view: V,
    config: TrackerConfig,
    topics: CompletionSet,
    sections: CompletionSet,
    session: SessionState,
    active_section: Option<String>,
    celebration_due: Option<Instant>,
}

impl<S: KeyValueStore, V: ViewSync> ProgressTracker<S, V> {
    /// Create a tracker with empty sets. Call [`restore`](Self::restore) to load.
    pub fn new(store: S, view: V) -> Self {
        Self {
            store: StoreAdapter::new(store),
            view,
            config: TrackerConfig::default(),
            topics: CompletionSet::new(),
            sections: CompletionSet::new(),
            session: SessionState::NotStarted,
            active_section: None,
            celebration_due: None,
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load both sets from the store and reset the session.
    ///
    /// Missing or corrupt entries load as empty sets, and unknown keys are
    /// dropped. The session always comes back `NotStarted`. If every topic is
    /// already complete but the learner was never congratulated, the
    /// celebration is scheduled again.
    pub fn restore(&mut self) -> (CompletionSet, CompletionSet) {
        self.topics = self.load_set(&self.config.topics_key(), sejarah_core::is_topic);
        self.sections = self.load_set(&self.config.sections_key(), is_section);
        self.session = SessionState::NotStarted;
        self.active_section = None;
        self.celebration_due = None;
        self.add_implied_sections();

        let snapshot = self.current_snapshot();
        debug!(
            topics = self.topics.len(),
            sections = self.sections.len(),
            percentage = snapshot.percentage,
            "progress restored"
        );
        self.view.on_restore(&self.topics, &self.sections, snapshot);
        self.schedule_celebration_if_due();

        (self.topics.clone(), self.sections.clone())
    }

    /// Start learning: reveal navigation and show `initial_section`.
    pub fn start_session(&mut self, initial_section: &str) -> Result<(), ValidationError> {
        if !is_section(initial_section) {
            warn!(section = initial_section, "rejected start with unknown section");
            return Err(ValidationError::InvalidSectionId(initial_section.to_string()));
        }

        self.session = SessionState::Started;
        info!(section = initial_section, "learning session started");
        self.view.on_session_started();
        self.activate_section(initial_section);
        Ok(())
    }

    /// Record that a topic has been viewed.
    ///
    /// Idempotent. Unknown ids are rejected without touching state.
    pub fn mark_topic_complete(&mut self, topic_id: &str) -> Result<MarkOutcome, ValidationError> {
        let Some(entry) = topic(topic_id) else {
            warn!(topic = topic_id, "rejected unknown topic");
            return Err(ValidationError::InvalidTopicId(topic_id.to_string()));
        };

        if self.topics.contains(entry.key) {
            return Ok(MarkOutcome::AlreadyComplete(self.current_snapshot()));
        }

        self.topics.insert(entry.key);
        self.sections.insert(entry.section);
        let snapshot = self.current_snapshot();
        self.persist();

        debug!(topic = entry.key, percentage = snapshot.percentage, "topic completed");
        self.view.on_topic_marked(entry.key, snapshot);
        self.schedule_celebration_if_due();

        Ok(MarkOutcome::Marked(snapshot))
    }

    /// Show a section. Only valid once learning has started.
    pub fn switch_section(&mut self, section_id: &str) -> Result<SectionSwitch, ValidationError> {
        if !self.session.is_started() {
            debug!(section = section_id, "section switch before start ignored");
            return Ok(SectionSwitch::Ignored);
        }
        if !is_section(section_id) {
            warn!(section = section_id, "rejected unknown section");
            return Err(ValidationError::InvalidSectionId(section_id.to_string()));
        }

        let previous = self.activate_section(section_id);
        Ok(SectionSwitch::Switched { previous })
    }

    /// Route a user event to the matching operation.
    pub fn handle(&mut self, event: ViewEvent) -> Result<Handled, ValidationError> {
        match event {
            ViewEvent::TopicActivated(id) => {
                let outcome = self.mark_topic_complete(&id)?;
                // mark_topic_complete has already validated the id.
                let entry = topic(&id).ok_or(ValidationError::InvalidTopicId(id))?;
                Ok(Handled::Topic(entry, outcome))
            }
            ViewEvent::SectionTabActivated(id) => self.switch_section(&id).map(Handled::Section),
            ViewEvent::LearningStartRequested => {
                let initial = self.config.initial_section.clone();
                self.start_session(&initial)?;
                Ok(Handled::Started)
            }
        }
    }

    /// Aggregate progress, consistent with the last mutation.
    pub fn current_snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::from_count(self.topics.len())
    }

    /// When the pending celebration should fire, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.celebration_due
    }

    /// Fire timers whose deadline is at or before `now`.
    ///
    /// Reads current state at fire time. Returns `true` if the celebration
    /// was delivered.
    pub fn fire_due_timers(&mut self, now: Instant) -> bool {
        match self.celebration_due {
            Some(due) if due <= now => self.celebration_due = None,
            _ => return false,
        }

        if !self.current_snapshot().is_complete() || self.is_congratulated() {
            return false;
        }

        info!("all topics complete");
        self.view.on_all_complete();
        let key = self.config.congratulated_key();
        self.store.set(&key, "true");
        true
    }

    /// Whether a topic has been viewed.
    pub fn is_topic_complete(&self, topic_id: &str) -> bool {
        self.topics.contains(topic_id)
    }

    /// Whether a section has been viewed.
    pub fn is_section_complete(&self, section_id: &str) -> bool {
        self.sections.contains(section_id)
    }

    /// Whether the one-time celebration has already been delivered.
    pub fn is_congratulated(&self) -> bool {
        self.store
            .get(&self.config.congratulated_key())
            .is_some_and(|v| !v.is_empty())
    }

    /// Completed topics.
    pub fn completed_topics(&self) -> &CompletionSet {
        &self.topics
    }

    /// Completed sections.
    pub fn completed_sections(&self) -> &CompletionSet {
        &self.sections
    }

    /// Session state for this load.
    pub fn session_state(&self) -> SessionState {
        self.session
    }

    /// Section currently shown, if learning has started.
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Configuration in use.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Borrow the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Borrow the view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Tear down, returning the backend (a reload reuses it).
    pub fn into_store(self) -> S {
        self.store.into_inner()
    }

    /// Tear down, returning the backend and the view.
    pub fn into_parts(self) -> (S, V) {
        (self.store.into_inner(), self.view)
    }

    fn activate_section(&mut self, section_id: &str) -> Option<String> {
        self.sections.insert(section_id);
        self.persist();

        let previous = self.active_section.replace(section_id.to_string());
        self.view.on_section_change(previous.as_deref(), section_id);
        previous
    }

    fn load_set(&self, key: &str, known: fn(&str) -> bool) -> CompletionSet {
        let Some(raw) = self.store.get(key) else {
            return CompletionSet::new();
        };

        let mut set = match CompletionSet::from_json(&raw) {
            Ok(set) => set,
            Err(e) => {
                warn!(key, error = %e, "corrupt persisted value, treating as empty");
                return CompletionSet::new();
            }
        };

        let dropped = set.retain_known(known);
        if !dropped.is_empty() {
            warn!(key, ?dropped, "ignoring unknown persisted ids");
        }
        set
    }

    fn add_implied_sections(&mut self) {
        let implied: Vec<&'static str> = self
            .topics
            .iter()
            .filter_map(|key| topic(key).map(|t| t.section))
            .collect();
        for section in implied {
            self.sections.insert(section);
        }
    }

    /// Two independent writes; a failure between them is not repaired.
    fn persist(&mut self) {
        let sections_key = self.config.sections_key();
        let topics_key = self.config.topics_key();
        let sections = self.sections.to_json();
        let topics = self.topics.to_json();
        self.store.set(&sections_key, &sections);
        self.store.set(&topics_key, &topics);
    }

    fn schedule_celebration_if_due(&mut self) {
        if self.celebration_due.is_some()
            || !self.current_snapshot().is_complete()
            || self.is_congratulated()
        {
            return;
        }
        let due = Instant::now() + self.config.celebration_delay;
        debug!(delay_ms = self.config.celebration_delay.as_millis() as u64, "celebration scheduled");
        self.celebration_due = Some(due);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NullView;
    use sejarah_core::{TOPICS, TOTAL_TOPICS};
    use sejarah_storage::{MemoryStore, Result as StorageResult, StorageError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Restore(Vec<String>, Vec<String>, u32),
        SessionStarted,
        SectionChange(Option<String>, String),
        TopicMarked(String, u32),
        AllComplete,
    }

    #[derive(Default)]
    struct RecordingView {
        calls: Vec<Call>,
    }

    impl RecordingView {
        fn count(&self, call: &Call) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }
    }

    impl ViewSync for RecordingView {
        fn on_restore(&mut self, t: &CompletionSet, s: &CompletionSet, snap: ProgressSnapshot) {
            self.calls.push(Call::Restore(
                t.iter().map(String::from).collect(),
                s.iter().map(String::from).collect(),
                snap.percentage,
            ));
        }
        fn on_session_started(&mut self) {
            self.calls.push(Call::SessionStarted);
        }
        fn on_section_change(&mut self, from: Option<&str>, to: &str) {
            self.calls.push(Call::SectionChange(from.map(String::from), to.to_string()));
        }
        fn on_topic_marked(&mut self, topic: &str, snapshot: ProgressSnapshot) {
            self.calls.push(Call::TopicMarked(topic.to_string(), snapshot.percentage));
        }
        fn on_all_complete(&mut self) {
            self.calls.push(Call::AllComplete);
        }
    }

    /// Memory store that can fail all reads or every write to one key.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        failing_key: Option<String>,
        fail_reads: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            if self.fail_reads {
                return Err(StorageError::Unavailable("disabled".into()));
            }
            self.inner.get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
            if self.failing_key.as_deref() == Some(key) {
                return Err(StorageError::Unavailable("quota exceeded".into()));
            }
            self.inner.set(key, value)
        }
        fn remove(&mut self, key: &str) -> StorageResult<()> {
            self.inner.remove(key)
        }
    }

    fn tracker(store: MemoryStore) -> ProgressTracker<MemoryStore, RecordingView> {
        let mut t = ProgressTracker::new(store, RecordingView::default());
        t.restore();
        t
    }

    fn reload(t: ProgressTracker<MemoryStore, RecordingView>) -> ProgressTracker<MemoryStore, RecordingView> {
        tracker(t.into_store())
    }

    fn mark_all(t: &mut ProgressTracker<MemoryStore, RecordingView>) {
        for topic in TOPICS.iter().rev() {
            t.mark_topic_complete(topic.key).unwrap();
        }
    }

    fn fire(t: &mut ProgressTracker<MemoryStore, RecordingView>) -> bool {
        match t.next_deadline() {
            Some(due) => t.fire_due_timers(due),
            None => false,
        }
    }

    #[test]
    fn test_empty_store_then_first_topic() {
        let mut t = tracker(MemoryStore::new());
        assert!(t.completed_topics().is_empty());
        assert_eq!(t.current_snapshot().percentage, 0);
        assert!(!t.is_topic_complete("kelahiran"));

        let outcome = t.mark_topic_complete("kelahiran").unwrap();
        assert!(outcome.is_new());
        assert!(t.is_topic_complete("kelahiran"));
        assert!(!t.is_topic_complete("nabi"));
        assert_eq!(outcome.snapshot().percentage, 8);
        assert_eq!(t.completed_topics().iter().collect::<Vec<_>>(), vec!["kelahiran"]);
        assert!(t.view().calls.contains(&Call::TopicMarked("kelahiran".into(), 8)));
    }

    #[test]
    fn test_marking_is_idempotent_and_order_independent() {
        let sequences: [&[&str]; 3] = [
            &["nabi", "hijrah", "nabi", "quran"],
            &["quran", "quran", "hijrah", "nabi", "hijrah"],
            &["hijrah", "nabi", "quran"],
        ];

        let mut results = Vec::new();
        for seq in sequences {
            let mut t = tracker(MemoryStore::new());
            for id in seq {
                t.mark_topic_complete(id).unwrap();
                let n = t.completed_topics().len();
                let expected = (100.0 * n as f64 / TOTAL_TOPICS as f64).round() as u32;
                assert_eq!(t.current_snapshot().percentage, expected);
            }
            results.push(t.completed_topics().clone());
        }

        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(results[0].len(), 3);
    }

    #[test]
    fn test_repeat_mark_does_not_notify() {
        let mut t = tracker(MemoryStore::new());
        t.mark_topic_complete("nabi").unwrap();
        let outcome = t.mark_topic_complete("nabi").unwrap();

        assert_eq!(outcome, MarkOutcome::AlreadyComplete(ProgressSnapshot::from_count(1)));
        assert_eq!(t.view().count(&Call::TopicMarked("nabi".into(), 8)), 1);
    }

    #[test]
    fn test_invalid_topic_rejected() {
        let mut t = tracker(MemoryStore::new());
        t.mark_topic_complete("nabi").unwrap();

        let err = t.mark_topic_complete("fiqih").unwrap_err();
        assert_eq!(err, ValidationError::InvalidTopicId("fiqih".into()));
        assert_eq!(t.completed_topics().len(), 1);
        assert_eq!(t.into_store().get("islamLearning_completedTopics").unwrap().as_deref(), Some(r#"["nabi"]"#));
    }

    #[test]
    fn test_reload_round_trips_topics_but_not_session() {
        let mut t = tracker(MemoryStore::new());
        t.start_session("sejarah").unwrap();
        t.switch_section("hukum").unwrap();
        t.mark_topic_complete("umayyah").unwrap();
        t.mark_topic_complete("abbasiyah").unwrap();
        let before = t.completed_topics().clone();

        let t = reload(t);
        assert_eq!(t.completed_topics(), &before);
        assert_eq!(t.current_snapshot().completed_count, 2);
        assert_eq!(t.session_state(), SessionState::NotStarted);
        assert_eq!(t.active_section(), None);
        assert!(t.is_section_complete("hukum"));
    }

    #[test]
    fn test_restore_notifies_view() {
        let store = MemoryStore::with_entries([
            ("islamLearning_completedTopics", r#"["nabi","quran","hijrah"]"#),
            ("islamLearning_completedSections", r#"["hukum"]"#),
        ]);
        let t = tracker(store);

        assert_eq!(
            t.view().calls,
            vec![Call::Restore(
                vec!["hijrah".into(), "nabi".into(), "quran".into()],
                vec!["hukum".into(), "sejarah".into()],
                25,
            )]
        );
    }

    #[test]
    fn test_corrupt_value_restores_empty() {
        let store = MemoryStore::with_entries([
            ("islamLearning_completedTopics", "not-json"),
            ("islamLearning_completedSections", r#"{"sejarah":true}"#),
        ]);
        let mut t = ProgressTracker::new(store, RecordingView::default());

        let (topics, sections) = t.restore();
        assert!(topics.is_empty());
        assert!(sections.is_empty());
        assert_eq!(t.current_snapshot().percentage, 0);
    }

    #[test]
    fn test_unknown_persisted_ids_dropped() {
        let store = MemoryStore::with_entries([
            ("islamLearning_completedTopics", r#"["nabi","tasawuf"]"#),
            ("islamLearning_completedSections", r#"["sejarah","akhlak"]"#),
        ]);
        let t = tracker(store);

        assert_eq!(t.completed_topics().iter().collect::<Vec<_>>(), vec!["nabi"]);
        assert_eq!(t.completed_sections().iter().collect::<Vec<_>>(), vec!["sejarah"]);
    }

    #[test]
    fn test_switch_before_start_is_ignored() {
        let mut t = tracker(MemoryStore::new());

        let result = t.switch_section("hukum").unwrap();
        assert!(!result.is_switched());
        assert!(t.completed_sections().is_empty());
        assert_eq!(t.into_store().get("islamLearning_completedSections").unwrap(), None);
    }

    #[test]
    fn test_start_then_switch_reports_previous() {
        let mut t = tracker(MemoryStore::new());
        t.start_session("sejarah").unwrap();
        assert_eq!(t.session_state(), SessionState::Started);
        assert!(t.is_section_complete("sejarah"));

        let result = t.switch_section("hukum").unwrap();
        assert_eq!(result, SectionSwitch::Switched { previous: Some("sejarah".into()) });
        assert_eq!(t.active_section(), Some("hukum"));

        let calls = &t.view().calls;
        assert!(calls.contains(&Call::SessionStarted));
        assert!(calls.contains(&Call::SectionChange(None, "sejarah".into())));
        assert!(calls.contains(&Call::SectionChange(Some("sejarah".into()), "hukum".into())));

        let store = t.into_store();
        assert_eq!(
            store.get("islamLearning_completedSections").unwrap().as_deref(),
            Some(r#"["hukum","sejarah"]"#)
        );
    }

    #[test]
    fn test_invalid_section_rejected() {
        let mut t = tracker(MemoryStore::new());
        assert_eq!(
            t.start_session("fiqih").unwrap_err(),
            ValidationError::InvalidSectionId("fiqih".into())
        );
        assert_eq!(t.session_state(), SessionState::NotStarted);

        t.start_session("sejarah").unwrap();
        assert!(t.switch_section("fiqih").is_err());
        assert_eq!(t.active_section(), Some("sejarah"));
        assert_eq!(t.completed_sections().len(), 1);
    }

    #[test]
    fn test_topic_marks_its_section() {
        let mut t = tracker(MemoryStore::new());
        t.mark_topic_complete("perang").unwrap();
        assert!(t.is_section_complete("sejarah"));
        assert!(!t.is_section_complete("hukum"));
    }

    #[test]
    fn test_celebration_fires_once() {
        let mut t = tracker(MemoryStore::new());
        mark_all(&mut t);
        assert_eq!(t.current_snapshot().percentage, 100);
        assert!(!t.is_congratulated());

        let due = t.next_deadline().expect("celebration scheduled");
        assert!(!t.fire_due_timers(due - t.config().celebration_delay));
        assert!(t.fire_due_timers(due));
        assert!(t.is_congratulated());
        assert_eq!(t.next_deadline(), None);

        t.mark_topic_complete("nabi").unwrap();
        assert_eq!(t.next_deadline(), None);

        let mut t = reload(t);
        assert_eq!(t.next_deadline(), None);
        assert!(!fire(&mut t));
        assert_eq!(t.view().count(&Call::AllComplete), 0);
    }

    #[test]
    fn test_celebration_rearmed_if_reloaded_before_firing() {
        let mut t = tracker(MemoryStore::new());
        mark_all(&mut t);
        assert!(t.next_deadline().is_some());

        let mut t = reload(t);
        assert!(fire(&mut t));
        assert_eq!(t.view().count(&Call::AllComplete), 1);
        assert_eq!(
            t.into_store().get("islamLearning_congratulated").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_no_celebration_below_full() {
        let mut t = tracker(MemoryStore::new());
        for topic in &TOPICS[1..] {
            t.mark_topic_complete(topic.key).unwrap();
        }
        assert_eq!(t.current_snapshot().percentage, 92);
        assert_eq!(t.next_deadline(), None);
        assert!(!t.fire_due_timers(Instant::now()));
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut t = tracker(MemoryStore::new());

        let handled = t.handle(ViewEvent::SectionTabActivated("hukum".into())).unwrap();
        assert_eq!(handled, Handled::Section(SectionSwitch::Ignored));

        assert_eq!(t.handle(ViewEvent::LearningStartRequested).unwrap(), Handled::Started);
        assert_eq!(t.active_section(), Some("sejarah"));

        match t.handle(ViewEvent::TopicActivated("hijrah".into())).unwrap() {
            Handled::Topic(entry, outcome) => {
                assert_eq!(entry.title, "Hijrah ke Madinah");
                assert!(outcome.is_new());
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(t.handle(ViewEvent::TopicActivated("bogus".into())).is_err());
    }

    #[test]
    fn test_custom_prefix() {
        let config = TrackerConfig {
            key_prefix: "demo_".into(),
            ..Default::default()
        };
        let mut t = ProgressTracker::new(MemoryStore::new(), NullView).with_config(config);
        t.restore();
        t.mark_topic_complete("masjid").unwrap();

        let store = t.into_store();
        assert!(store.get("demo_completedTopics").unwrap().is_some());
        assert!(store.get("islamLearning_completedTopics").unwrap().is_none());
    }

    #[test]
    fn test_unavailable_storage_degrades_to_empty() {
        let store = FlakyStore { fail_reads: true, ..Default::default() };
        let mut t = ProgressTracker::new(store, RecordingView::default());

        let (topics, _) = t.restore();
        assert!(topics.is_empty());

        // In-memory progress still advances.
        assert_eq!(t.mark_topic_complete("nabi").unwrap().snapshot().completed_count, 1);
    }

    /// Known limitation: the two sets are written separately, so a failure on
    /// the second write leaves them out of step after a reload.
    #[test]
    fn test_partial_write_leaves_sets_inconsistent() {
        let store = FlakyStore {
            failing_key: Some("islamLearning_completedTopics".into()),
            ..Default::default()
        };
        let mut t = ProgressTracker::new(store, RecordingView::default());
        t.restore();
        t.mark_topic_complete("nabi").unwrap();

        let mut store = t.into_store();
        store.failing_key = None;
        let mut t = ProgressTracker::new(store, RecordingView::default());
        let (topics, sections) = t.restore();

        assert!(topics.is_empty());
        assert!(sections.contains("sejarah"));
    }
}
