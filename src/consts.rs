//! Shared constants.

/// Hard cap on the number of entries a catalog may hold.
pub const MAX_WORDS: usize = 5;

/// Default location of the persisted wordbook.
pub const DEFAULT_FILE: &str = "wordbook.json";

/// Suffix appended to the wordbook path to form the session lock file.
pub const LOCK_SUFFIX: &str = ".lock";

/// Indentation of the persisted JSON object.
pub const JSON_INDENT: &[u8] = b"    ";
