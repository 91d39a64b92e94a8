use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_vocab_toml, VocabConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_vocab.toml");

/// Returns the embedded default vocabulary TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Number words and their successors, with keys pre-sorted for matching.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    successors: HashMap<String, String>,
    /// Keys by byte length descending, then lexicographically.
    by_length: Vec<String>,
}

impl Vocabulary {
    /// Get or initialize the built-in vocabulary.
    pub fn global() -> &'static Vocabulary {
        static INSTANCE: OnceLock<Vocabulary> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Vocabulary::from_toml(DEFAULT_TOML).expect("vocabulary TOML must be valid")
        })
    }

    /// Build a vocabulary from a `[successors]` TOML table.
    pub fn from_toml(toml_str: &str) -> Result<Self, VocabConfigError> {
        parse_vocab_toml(toml_str).map(Self::from_map)
    }

    fn from_map(map: BTreeMap<String, String>) -> Self {
        // BTreeMap iterates in key order, so the stable sort breaks length
        // ties lexicographically.
        let mut by_length: Vec<String> = map.keys().cloned().collect();
        by_length.sort_by(|a, b| b.len().cmp(&a.len()));
        let successors: HashMap<String, String> = map.into_iter().collect();
        debug!(
            words = successors.len(),
            max_len = by_length.first().map_or(0, |w| w.len()),
            "vocabulary built"
        );
        Self {
            successors,
            by_length,
        }
    }

    /// The successor of a lowercase vocabulary key.
    pub fn successor_of(&self, word: &str) -> Option<&str> {
        self.successors.get(word).map(String::as_str)
    }

    /// Keys no longer than `max_len` bytes, longest first.
    pub fn match_candidates(&self, max_len: usize) -> &[String] {
        let start = self.by_length.partition_point(|w| w.len() > max_len);
        &self.by_length[start..]
    }

    /// Length in bytes of the longest key.
    pub fn max_word_len(&self) -> usize {
        self.by_length.first().map_or(0, String::len)
    }

    /// `(word, successor)` pairs in match priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_length
            .iter()
            .map(|w| (w.as_str(), self.successors[w].as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_length.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}
