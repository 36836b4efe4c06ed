//! JSON file storage implementation.
//!
//! Stores the whole key/value map as one JSON document in the data directory
//! and keeps a small meta marker (version + updated_at) next to it. Every
//! write goes straight to disk, so a process exit loses nothing already set.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use super::{KeyValueStore, Result};

const STORE_FILE: &str = "store.json";
const META_FILE: &str = "store.meta.json";

/// File-backed key/value store.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store under `root`, creating the directory if needed.
    ///
    /// A document that does not parse as a JSON object of strings is
    /// discarded and rewritten empty, the same as a cleared store. Only I/O
    /// failures make opening fail.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;

        let (entries, corrupt) = match fs::read_to_string(root.join(STORE_FILE)) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(entries) => (entries, false),
                Err(e) => {
                    tracing::warn!(path = %root.display(), error = %e, "corrupt store document, starting empty");
                    (BTreeMap::new(), true)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (BTreeMap::new(), false),
            Err(e) => return Err(e.into()),
        };

        let store = Self { root, entries };
        if corrupt {
            store.flush()?;
        }

        tracing::debug!(path = %store.root.display(), keys = store.entries.len(), "opened json store");
        Ok(store)
    }

    /// Data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current document version, 0 if never written.
    pub fn version(&self) -> u64 {
        fs::read_to_string(self.root.join(META_FILE))
            .ok()
            .and_then(|s| serde_json::from_str::<serde_json::Value>(&s).ok())
            .and_then(|json| json.get("version").and_then(|v| v.as_u64()))
            .unwrap_or(0)
    }

    /// Meta marker first: once the document lands, nothing after it can fail.
    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        self.bump_version()?;
        fs::write(self.root.join(STORE_FILE), json.as_bytes())?;
        Ok(())
    }

    /// Increment the document version in the meta marker, return the new version.
    fn bump_version(&self) -> Result<u64> {
        let version = self.version() + 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(self.root.join(META_FILE), serde_json::to_string_pretty(&meta)?.as_bytes())?;
        Ok(version)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory in step with disk.
            match previous {
                Some(v) => self.entries.insert(key.to_string(), v),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
