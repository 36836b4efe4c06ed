//! Sejarah CLI - Islamic history lessons with persisted progress.

mod learn;
mod view;

use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sejarah_core::{topic, SECTIONS};
use sejarah_progress::{Handled, ProgressTracker, TrackerConfig, ViewEvent};
use sejarah_storage::{JsonFileStore, KeyValueStore, MemoryStore, StoreAdapter};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::view::TerminalView;

#[derive(Parser)]
#[command(name = "sejarah")]
#[command(about = "Belajar Sejarah Islam dengan progres tersimpan", long_about = None)]
struct Cli {
    /// Directory holding persisted progress
    #[arg(long, env = "SEJARAH_DATA_DIR", default_value = ".sejarah")]
    data_dir: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List topics with completion badges
    Topics,
    /// Open a topic and mark it complete
    Open {
        /// Topic key, e.g. `kelahiran`
        topic: String,
    },
    /// Show overall progress
    Status,
    /// Clear persisted progress
    Reset,
    /// Interactive session (default)
    Learn,
}

pub(crate) const TOPICS_HINT: &str = "Ketik `topics` untuk melihat daftar materi.";

type Tracker = ProgressTracker<Box<dyn KeyValueStore>, TerminalView<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let dir = cli.data_dir;
    let config = TrackerConfig::default();

    match cli.command.unwrap_or(Commands::Learn) {
        Commands::Reset => {
            reset(&dir, &config)?;
            println!("Progres dihapus.");
        }
        Commands::Topics => load(open_store(&dir), config).view_mut().render_catalog(),
        Commands::Open { topic: key } => {
            let mut tracker = load(open_store(&dir), config);
            if open_topic(&mut tracker, key) {
                learn::drain_timers(&mut tracker).await;
            }
        }
        Commands::Status => print_status(&mut load(open_store(&dir), config)),
        Commands::Learn => learn::run(&mut load(open_store(&dir), config)).await?,
    }

    Ok(())
}

/// One "page load": a fresh tracker restored from the store.
fn load(store: Box<dyn KeyValueStore>, config: TrackerConfig) -> Tracker {
    let mut tracker =
        ProgressTracker::new(store, TerminalView::new(std::io::stdout())).with_config(config);
    tracker.restore();
    tracker
}

/// Show a topic and mark it complete. Unknown keys only get a hint.
fn open_topic<S, W>(tracker: &mut ProgressTracker<S, TerminalView<W>>, key: String) -> bool
where
    S: KeyValueStore,
    W: Write,
{
    match tracker.handle(ViewEvent::TopicActivated(key)) {
        Ok(Handled::Topic(entry, _)) => tracker.view_mut().render_detail(entry),
        Ok(_) => {}
        Err(e) => {
            debug!(error = %e, "topic rejected");
            tracker.view_mut().message(TOPICS_HINT);
            return false;
        }
    }
    true
}

/// External clearing of every persisted key, including the congratulation flag.
///
/// Works on the file store only; clearing a volatile fallback would report
/// success while the data on disk stays.
fn reset(dir: &Path, config: &TrackerConfig) -> Result<()> {
    let store = JsonFileStore::open(dir)
        .with_context(|| format!("cannot open progress store at {}", dir.display()))?;
    let mut adapter = StoreAdapter::new(store);
    let keys = config.keys();
    let cleared = keys.iter().filter(|k| adapter.delete(k)).count();
    info!(cleared, "progress reset");
    if cleared < keys.len() {
        bail!("only {cleared} of {} progress keys could be cleared", keys.len());
    }
    Ok(())
}

/// Open the file store, falling back to a volatile one so progress never blocks learning.
fn open_store(dir: &Path) -> Box<dyn KeyValueStore> {
    match JsonFileStore::open(dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "storage unavailable, progress will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

pub(crate) fn print_status<S, W>(tracker: &mut ProgressTracker<S, TerminalView<W>>)
where
    S: KeyValueStore,
    W: Write,
{
    let snapshot = tracker.current_snapshot();
    let sections: Vec<&str> = SECTIONS
        .iter()
        .copied()
        .filter(|s| tracker.is_section_complete(s))
        .collect();
    let last = tracker
        .completed_topics()
        .iter()
        .filter_map(topic)
        .map(|t| t.title)
        .collect::<Vec<_>>()
        .join(", ");

    let view = tracker.view_mut();
    view.message(&format!("Progress: {snapshot}"));
    let opened = if sections.is_empty() { "-".to_string() } else { sections.join(", ") };
    view.message(&format!("Bagian dibuka: {opened}"));
    if !last.is_empty() {
        view.message(&format!("Materi selesai: {last}"));
    }
}
