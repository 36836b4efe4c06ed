//! Terminal rendering of tracker state.

use std::io::Write;

use sejarah_core::{CompletionSet, ProgressSnapshot, Topic, SECTIONS, TOPICS};
use sejarah_progress::ViewSync;

const CELEBRATION: &str = "🎉 Selamat! Anda telah menyelesaikan semua materi Sejarah Islam!";

/// Renders badges, tabs and progress as text.
///
/// Keeps its own badge set, updated from tracker callbacks, the way a page
/// keeps badge visibility in the DOM.
pub struct TerminalView<W: Write> {
    out: W,
    badges: CompletionSet,
    snapshot: ProgressSnapshot,
}

impl<W: Write> TerminalView<W> {
    /// Render into `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            badges: CompletionSet::new(),
            snapshot: ProgressSnapshot::default(),
        }
    }

    /// Print every topic with its badge, then overall progress.
    pub fn render_catalog(&mut self) {
        for topic in TOPICS.iter() {
            self.render_card(topic);
        }
        self.render_progress();
    }

    /// Print a topic's detail.
    pub fn render_detail(&mut self, topic: &Topic) {
        let _ = writeln!(self.out, "\n{}\n{}", topic.title, "=".repeat(topic.title.chars().count()));
        let _ = writeln!(self.out, "{}\n", topic.body);
    }

    /// Print the progress line.
    pub fn render_progress(&mut self) {
        let _ = writeln!(self.out, "Progress: {}", self.snapshot);
    }

    /// Print a plain message.
    pub fn message(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    /// Unwrap the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_card(&mut self, topic: &Topic) {
        let badge = if self.badges.contains(topic.key) { "✓" } else { " " };
        let _ = writeln!(self.out, "  [{badge}] {:<12} {}", topic.key, topic.title);
    }
}

impl<W: Write> ViewSync for TerminalView<W> {
    fn on_restore(&mut self, topics: &CompletionSet, _sections: &CompletionSet, snapshot: ProgressSnapshot) {
        self.badges = topics.clone();
        self.snapshot = snapshot;
    }

    fn on_session_started(&mut self) {
        let tabs = SECTIONS.join(" | ");
        let _ = writeln!(self.out, "Tabs: {tabs}");
    }

    fn on_section_change(&mut self, _from: Option<&str>, to: &str) {
        let _ = writeln!(self.out, "\n== {to} ==");
        let cards: Vec<&Topic> = TOPICS.iter().filter(|t| t.section == to).collect();
        if cards.is_empty() {
            let _ = writeln!(self.out, "  (belum ada materi)");
        }
        for topic in cards {
            self.render_card(topic);
        }
    }

    fn on_topic_marked(&mut self, topic: &str, snapshot: ProgressSnapshot) {
        self.badges.insert(topic);
        self.snapshot = snapshot;
        let _ = writeln!(self.out, "✓ {topic} selesai. Progress: {snapshot}");
    }

    fn on_all_complete(&mut self) {
        let _ = writeln!(self.out, "\n{CELEBRATION}");
    }
}
