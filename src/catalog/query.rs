//! catalog/query — read-only views: prefix search, sorted list, statistics.

use serde::Serialize;

use super::core::{normalize_word, Catalog};

/// Sort direction for [`Catalog::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Order::Ascending
        } else {
            Order::Descending
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub count: usize,
    /// Empty when the catalog is empty.
    pub longest_word: String,
    pub words_by_length_desc: Vec<String>,
}

impl Catalog {
    /// Entries whose word starts with the case-folded `keyword`, in insertion order.
    /// An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> Vec<(String, String)> {
        let prefix = normalize_word(keyword);
        self.iter()
            .filter(|(k, _)| k.starts_with(prefix.as_str()))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// All entries sorted by word.
    pub fn list(&self, order: Order) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        if order == Order::Descending {
            out.reverse();
        }
        out
    }

    pub fn statistics(&self) -> Statistics {
        // first max wins: только при строго большей длине
        let mut longest: Option<(&str, usize)> = None;
        for w in self.words() {
            let n = w.chars().count();
            match longest {
                Some((_, best)) if n <= best => {}
                _ => longest = Some((w, n)),
            }
        }

        let mut by_len: Vec<String> = self.words().map(str::to_string).collect();
        // sort_by стабилен: равные длины в порядке вставки
        by_len.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        Statistics {
            count: self.len(),
            longest_word: longest.map(|(w, _)| w.to_string()).unwrap_or_default(),
            words_by_length_desc: by_len,
        }
    }
}
