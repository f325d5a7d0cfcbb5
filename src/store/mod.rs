//! Word set store
//!
//! Owns every word set, the active-set pointer, and their persisted
//! form. Each mutation writes the whole state through to storage
//! before returning. Operations are total: unknown ids are ignored,
//! numbers are clamped, and unreadable data loads as an empty store.
//!
//! Persisted record (JSON, under [`STORAGE_KEY`]):
//! ```text
//! { "sets": [ { "id", "name", "words", "currentIndex", "wpm" } ],
//!   "activeSetId": "..." | null }
//! ```

mod word_set;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::storage::KeyValueStore;

use word_set::{unique_words, StoredWordSet};
pub use word_set::{clamp_wpm, normalize_lines, WordSet, DEFAULT_WPM, WPM_MAX, WPM_MIN};

/// Storage key for the word set record
pub const STORAGE_KEY: &str = "rapid-recall:word-sets";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState<'a> {
    sets: &'a [WordSet],
    active_set_id: Option<&'a str>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct StoredState {
    sets: Vec<serde_json::Value>,
    active_set_id: serde_json::Value,
}

/// The collection of word sets and which one is being read
#[derive(Debug)]
pub struct WordSetStore<S> {
    storage: S,
    sets: Vec<WordSet>,
    active_set_id: Option<String>,
}

impl<S: KeyValueStore> WordSetStore<S> {
    /// Create an empty store backed by `storage`
    ///
    /// Nothing is read until [`hydrate`](Self::hydrate) is called.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            sets: Vec::new(),
            active_set_id: None,
        }
    }

    /// Load state from storage, replacing whatever is in memory
    ///
    /// Missing, empty or corrupt data yields an empty store. A single
    /// set that cannot be read is skipped; the others still load.
    pub fn hydrate(&mut self) {
        let state = self.load_state();
        self.sets = state
            .sets
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<StoredWordSet>(value) {
                Ok(stored) => Some(WordSet::from(stored)),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable word set");
                    None
                }
            })
            .collect();
        self.active_set_id = state.active_set_id.as_str().map(str::to_string);
        tracing::info!(
            sets = self.sets.len(),
            active = ?self.active_set_id,
            "hydrated word sets"
        );
    }

    fn load_state(&self) -> StoredState {
        let bytes = match self.storage.get(STORAGE_KEY) {
            Ok(Some(bytes)) if !bytes.is_empty() => bytes,
            Ok(_) => return StoredState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored sets");
                return StoredState::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse stored sets");
                StoredState::default()
            }
        }
    }

    /// Write the current state to storage
    ///
    /// Failures are logged; the in-memory state stays authoritative.
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(error = %e, "failed to persist word sets");
        }
    }

    fn try_persist(&mut self) -> Result<()> {
        let state = PersistedState {
            sets: &self.sets,
            active_set_id: self.active_set_id.as_deref(),
        };
        let bytes = serde_json::to_vec(&state)?;
        self.storage.set(STORAGE_KEY, &bytes)
    }

    /// All sets, newest first
    pub fn sets(&self) -> &[WordSet] {
        &self.sets
    }

    /// Look up a set by id
    pub fn get(&self, id: &str) -> Option<&WordSet> {
        self.sets.iter().find(|set| set.id == id)
    }

    /// Look up a set by its display name (first match)
    pub fn find_by_name(&self, name: &str) -> Option<&WordSet> {
        let name = name.trim();
        self.sets.iter().find(|set| set.name == name)
    }

    /// Id of the selected set
    pub fn active_set_id(&self) -> Option<&str> {
        self.active_set_id.as_deref()
    }

    /// The selected set, if it exists
    pub fn active_set(&self) -> Option<&WordSet> {
        self.active_set_id.as_deref().and_then(|id| self.get(id))
    }

    /// The underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the underlying storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut WordSet> {
        self.sets.iter_mut().find(|set| set.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Create a new set and make it active
    ///
    /// Returns `None` without changing anything if the name is blank.
    pub fn create_set(&mut self, name: &str) -> Option<&WordSet> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let set = WordSet::new(self.fresh_id(), name.to_string());
        tracing::info!(id = %set.id, name, "created word set");
        self.active_set_id = Some(set.id.clone());
        self.sets.insert(0, set);
        self.persist();
        self.sets.first()
    }

    /// Give a set a new name; blank names are ignored
    pub fn rename_set(&mut self, id: &str, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let Some(set) = self.find_mut(id) else {
            return;
        };
        set.name = name.to_string();
        tracing::debug!(id, name, "renamed word set");
        self.persist();
    }

    /// Remove a set
    ///
    /// If it was active, the first remaining set becomes active.
    pub fn delete_set(&mut self, id: &str) {
        let before = self.sets.len();
        self.sets.retain(|set| set.id != id);
        if self.sets.len() != before {
            tracing::info!(id, "deleted word set");
        }

        if self.active_set_id.as_deref() == Some(id) {
            self.active_set_id = self.sets.first().map(|set| set.id.clone());
        }
        self.persist();
    }

    /// Make a set active; the id is not checked
    pub fn select_set(&mut self, id: &str) {
        self.active_set_id = Some(id.to_string());
        tracing::debug!(id, "selected word set");
        self.persist();
    }

    /// Append words from text, one per line, skipping ones already present
    ///
    /// Returns how many words were added.
    pub fn import_words(&mut self, id: &str, text: &str) -> usize {
        let Some(set) = self.find_mut(id) else {
            return 0;
        };

        let mut existing: HashSet<String> = set.words.iter().cloned().collect();
        let mut added = 0;
        for word in normalize_lines(text) {
            if existing.insert(word.clone()) {
                set.words.push(word);
                added += 1;
            }
        }

        tracing::debug!(id, added, total = set.words.len(), "imported words");
        self.persist();
        added
    }

    /// Replace all words with the lines of `text` and restart from the top
    ///
    /// Returns the resulting word count.
    pub fn replace_words(&mut self, id: &str, text: &str) -> usize {
        let Some(set) = self.find_mut(id) else {
            return 0;
        };

        set.words = unique_words(normalize_lines(text));
        set.current_index = 0;

        let count = set.words.len();
        tracing::debug!(id, count, "replaced words");
        self.persist();
        count
    }

    /// Words of a set, one per line; empty if the set is unknown
    pub fn export_words(&self, id: &str) -> String {
        self.get(id)
            .map(|set| set.words.join("\n"))
            .unwrap_or_default()
    }

    /// Move the reading position, clamped to the word list
    pub fn set_index(&mut self, id: &str, next_index: i64) {
        let Some(set) = self.find_mut(id) else {
            return;
        };
        set.seek(next_index);
        tracing::debug!(id, index = set.current_index, "moved reading position");
        self.persist();
    }

    /// Change the reading speed, clamped into `[WPM_MIN, WPM_MAX]`
    pub fn set_wpm(&mut self, id: &str, wpm: f64) {
        let Some(set) = self.find_mut(id) else {
            return;
        };
        set.wpm = clamp_wpm(wpm);
        tracing::debug!(id, wpm = set.wpm, "changed reading speed");
        self.persist();
    }

    /// Restart a set from its first word
    pub fn clear_progress(&mut self, id: &str) {
        let Some(set) = self.find_mut(id) else {
            return;
        };
        set.current_index = 0;
        tracing::debug!(id, "cleared progress");
        self.persist();
    }
}
