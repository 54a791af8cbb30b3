//! catalog/core — the Catalog type.
//!
//! Записи хранятся в Vec в порядке вставки (не больше MAX_WORDS, поиск линейный).
//! Порядок итерации задаёт tie-break в statistics и порядок выдачи search.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Case-fold a word the way every write and lookup does.
#[inline]
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Bounded word -> meaning mapping with insertion-ordered iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, String)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw pairs, as decoded from storage.
    ///
    /// Keys are taken verbatim (no case folding, no capacity check). A repeated
    /// key keeps its first position and takes the later meaning.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut cat = Self::new();
        for (k, v) in entries {
            let (k, v) = (k.into(), v.into());
            match cat.position_raw(&k) {
                Some(i) => cat.entries[i].1 = v,
                None => cat.entries.push((k, v)),
            }
        }
        cat
    }

    /// Pairs already known to have distinct keys (a decoded JSON object).
    pub(crate) fn from_unique_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Meaning stored for `word` (looked up case-insensitively).
    pub fn get(&self, word: &str) -> Option<&str> {
        self.position(word).map(|i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// (word, meaning) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// True when every key is already in lowercase form.
    pub fn keys_normalized(&self) -> bool {
        self.entries.iter().all(|(k, _)| *k == normalize_word(k))
    }

    pub(crate) fn position(&self, word: &str) -> Option<usize> {
        self.position_raw(&normalize_word(word))
    }

    pub(crate) fn position_raw(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub(crate) fn push(&mut self, key: String, meaning: String) {
        self.entries.push((key, meaning));
    }

    pub(crate) fn set_meaning(&mut self, idx: usize, meaning: String) {
        self.entries[idx].1 = meaning;
    }

    pub(crate) fn remove_at(&mut self, idx: usize) -> (String, String) {
        self.entries.remove(idx)
    }
}

/// Serialized as a flat JSON object in insertion order.
impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
