//! catalog/ops — мутации каталога (add/update/delete).
//!
//! Порядок проверок в add: сначала лимит, потом дубликат. Полный каталог
//! отвечает CapacityExceeded даже для уже существующего слова.

use crate::consts::MAX_WORDS;

use super::core::{normalize_word, Catalog};
use super::outcome::{Outcome, Rejection};

impl Catalog {
    /// Insert `word` (case-folded) with `meaning` stored verbatim.
    pub fn add(&mut self, word: &str, meaning: &str) -> Result<Outcome, Rejection> {
        if self.len() >= MAX_WORDS {
            return Err(Rejection::CapacityExceeded);
        }
        let key = normalize_word(word);
        if self.position_raw(&key).is_some() {
            return Err(Rejection::DuplicateWord);
        }
        self.push(key, meaning.to_string());
        Ok(Outcome::Added)
    }

    /// Replace the meaning of an existing word. Position is kept.
    pub fn update(&mut self, word: &str, new_meaning: &str) -> Result<Outcome, Rejection> {
        let idx = self.position(word).ok_or(Rejection::NotFound)?;
        self.set_meaning(idx, new_meaning.to_string());
        Ok(Outcome::Updated)
    }

    /// Remove a word entirely.
    pub fn delete(&mut self, word: &str) -> Result<Outcome, Rejection> {
        let idx = self.position(word).ok_or(Rejection::NotFound)?;
        self.remove_at(idx);
        Ok(Outcome::Deleted)
    }
}
