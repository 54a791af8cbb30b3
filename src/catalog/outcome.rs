//! catalog/outcome — closed result set of catalog mutations.

use crate::consts::MAX_WORDS;

/// Successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Updated,
    Deleted,
}

impl Outcome {
    /// Status line shown to the user. `Added` is silent.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Added => "",
            Outcome::Updated => "meaning updated",
            Outcome::Deleted => "word deleted",
        }
    }
}

/// Business-rule violation. Always recoverable: the catalog is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Catalog already holds MAX_WORDS entries.
    #[error("maximum {} words", MAX_WORDS)]
    CapacityExceeded,
    /// The (case-folded) word is already a key.
    #[error("already registered")]
    DuplicateWord,
    /// Update/delete target is absent.
    #[error("word not found")]
    NotFound,
}

impl Rejection {
    pub fn message(&self) -> String {
        self.to_string()
    }
}
