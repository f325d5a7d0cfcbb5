//! Word set records and the normalization rules applied to them

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Slowest allowed reading speed
pub const WPM_MIN: u32 = 1;
/// Fastest allowed reading speed
pub const WPM_MAX: u32 = 300;
/// Reading speed given to new sets
pub const DEFAULT_WPM: u32 = 100;

/// A named, ordered collection of words with its own reading progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSet {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) words: Vec<String>,
    pub(crate) current_index: usize,
    pub(crate) wpm: u32,
}

impl WordSet {
    /// Create an empty set with default speed
    pub(crate) fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            words: Vec::new(),
            current_index: 0,
            wpm: DEFAULT_WPM,
        }
    }

    /// Unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Words in reading order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Index of the word currently shown
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Reading speed in words per minute
    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    /// The word at the reading position, if the set has any words
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.current_index).map(String::as_str)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if the reading position is on the final word
    pub fn at_last_word(&self) -> bool {
        self.current_index >= self.max_index()
    }

    /// Largest valid reading position
    pub fn max_index(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// Move the reading position, clamped into bounds
    pub(crate) fn seek(&mut self, next_index: i64) {
        let requested = usize::try_from(next_index.max(0)).unwrap_or(usize::MAX);
        self.current_index = requested.min(self.max_index());
    }
}

/// Clamp a requested reading speed into `[WPM_MIN, WPM_MAX]`
///
/// NaN means "no usable number" and becomes [`DEFAULT_WPM`]. Fractions
/// round to the nearest integer, halves away from zero.
pub fn clamp_wpm(wpm: f64) -> u32 {
    if wpm.is_nan() {
        return DEFAULT_WPM;
    }
    let bounded = wpm.clamp(f64::from(WPM_MIN), f64::from(WPM_MAX)).round();
    // bounded lies in [1, 300]
    bounded as u32
}

/// Split raw text into trimmed, non-empty lines
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep the first occurrence of each word
pub(crate) fn unique_words<I: IntoIterator<Item = String>>(words: I) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Persisted form of a word set, as loaded
///
/// Lenient about fields older or hand-edited data may lack or mistype;
/// values are normalized when converted into a [`WordSet`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredWordSet {
    id: String,
    name: String,
    #[serde(default)]
    words: Vec<Value>,
    #[serde(default)]
    current_index: Value,
    #[serde(default)]
    wpm: Value,
}

/// Reading position from a stored number; fractions truncate, anything
/// else is 0
fn stored_index(value: &Value) -> i64 {
    match value.as_i64() {
        Some(index) => index,
        // float to int casts saturate
        None => value.as_f64().map_or(0, |index| index.trunc() as i64),
    }
}

/// Speed from a stored number; anything else is [`DEFAULT_WPM`]
fn stored_wpm(value: &Value) -> u32 {
    clamp_wpm(value.as_f64().unwrap_or(f64::from(DEFAULT_WPM)))
}

impl From<StoredWordSet> for WordSet {
    fn from(stored: StoredWordSet) -> Self {
        let words = stored.words.into_iter().filter_map(|word| match word {
            Value::String(word) => {
                let word = word.trim();
                (!word.is_empty()).then(|| word.to_string())
            }
            _ => None,
        });

        let mut set = WordSet {
            id: stored.id,
            name: stored.name,
            words: unique_words(words),
            current_index: 0,
            wpm: stored_wpm(&stored.wpm),
        };
        set.seek(stored_index(&stored.current_index));
        set
    }
}
