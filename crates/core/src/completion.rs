//! Completion sets - which topics or sections have been viewed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of completed topic or section keys.
///
/// Serialized as a JSON array of strings. Ordering carries no meaning; a
/// `BTreeSet` keeps the persisted form stable between writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<String>);

impl CompletionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted JSON array form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Render the persisted JSON array form.
    pub fn to_json(&self) -> String {
        // A set of strings always serializes.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Insert a key. Returns `true` if it was not already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    /// Whether the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Keep only the keys accepted by `keep`, returning the dropped ones.
    pub fn retain_known(&mut self, keep: impl Fn(&str) -> bool) -> Vec<String> {
        let dropped: Vec<String> = self.0.iter().filter(|k| !keep(k.as_str())).cloned().collect();
        for key in &dropped {
            self.0.remove(key);
        }
        dropped
    }
}

impl<S: Into<String>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
