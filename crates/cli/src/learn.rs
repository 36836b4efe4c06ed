//! Interactive learning loop.
//!
//! Stdin lines are the user events; the tracker's celebration deadline is the
//! only timer. Both are awaited in one `select!` so the loop behaves like a
//! page's event loop: each command runs to completion before the next.

use std::io::Write;
use std::time::Instant;

use clap::{Parser, Subcommand};
use sejarah_core::{ValidationError, SECTIONS};
use sejarah_progress::{Handled, ProgressTracker, SectionSwitch, ViewEvent};
use sejarah_storage::KeyValueStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::view::TerminalView;

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum LineCommand {
    /// Start learning and show the first section
    Start,
    /// Switch to a section tab
    Tab {
        /// Section key
        section: String,
    },
    /// Open a topic's detail
    Open {
        /// Topic key
        topic: String,
    },
    /// List all topics
    Topics,
    /// Show progress
    Status,
    /// Leave
    #[command(alias = "exit")]
    Quit,
}

fn parse_line(line: &str) -> Result<LineCommand, clap::Error> {
    Line::try_parse_from(line.split_whitespace()).map(|l| l.command)
}

/// Run the loop until `quit` or end of input.
pub async fn run<S, W>(tracker: &mut ProgressTracker<S, TerminalView<W>>) -> anyhow::Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    tracker
        .view_mut()
        .message("Ketik `start` untuk mulai belajar, `help` untuk daftar perintah.");

    loop {
        let deadline = tracker.next_deadline();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_line(&line) {
                    Ok(LineCommand::Quit) => break,
                    Ok(command) => apply(tracker, command),
                    Err(e) => {
                        let _ = e.print();
                    }
                }
            }
            _ = sleep_until(deadline) => {
                tracker.fire_due_timers(Instant::now());
            }
        }
    }

    debug!("learning loop finished");
    Ok(())
}

/// Wait out pending timers (used by one-shot commands before exit).
pub async fn drain_timers<S, W>(tracker: &mut ProgressTracker<S, TerminalView<W>>)
where
    S: KeyValueStore,
    W: Write,
{
    while let Some(due) = tracker.next_deadline() {
        tokio::time::sleep_until(due.into()).await;
        tracker.fire_due_timers(Instant::now());
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(due) => tokio::time::sleep_until(due.into()).await,
        None => std::future::pending().await,
    }
}

fn apply<S, W>(tracker: &mut ProgressTracker<S, TerminalView<W>>, command: LineCommand)
where
    S: KeyValueStore,
    W: Write,
{
    let event = match command {
        LineCommand::Start => ViewEvent::LearningStartRequested,
        LineCommand::Tab { section } => ViewEvent::SectionTabActivated(section),
        LineCommand::Open { topic } => ViewEvent::TopicActivated(topic),
        LineCommand::Topics => {
            tracker.view_mut().render_catalog();
            return;
        }
        LineCommand::Status => {
            crate::print_status(tracker);
            return;
        }
        LineCommand::Quit => return,
    };

    match tracker.handle(event) {
        Ok(Handled::Topic(topic, _)) => tracker.view_mut().render_detail(topic),
        Ok(Handled::Section(SectionSwitch::Ignored)) => {
            tracker.view_mut().message("Ketik `start` dulu untuk membuka tab.");
        }
        Ok(Handled::Section(SectionSwitch::Switched { .. })) | Ok(Handled::Started) => {}
        Err(e) => {
            // Rejections are logged by the tracker; only hint at valid input.
            debug!(error = %e, "event rejected");
            let hint = match e {
                ValidationError::InvalidSectionId(_) => {
                    format!("Tab tersedia: {}", SECTIONS.join(", "))
                }
                ValidationError::InvalidTopicId(_) => crate::TOPICS_HINT.to_string(),
            };
            tracker.view_mut().message(&hint);
        }
    }
}
