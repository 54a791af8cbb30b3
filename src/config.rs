//! Centralized configuration and builder for wordbook sessions.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - WordbookConfig::from_env() reads WORDBOOK_* variables.
//! - SessionBuilder returns a WordbookConfig, which Session consumes.
//!
//! Env:
//! - WORDBOOK_PATH         — путь к JSON-файлу (default "wordbook.json")
//! - WORDBOOK_LOCK         — 0|1|true|false|yes|no|on|off (default on)
//! - WORDBOOK_SAVE_ON_DROP — best-effort save of a dirty session on drop (default on)

use std::fmt;
use std::path::{Path, PathBuf};

use crate::consts::DEFAULT_FILE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordbookConfig {
    /// Location of the persisted wordbook.
    pub path: PathBuf,

    /// Take an exclusive advisory lock on `<path>.lock` for the session lifetime.
    pub lock: bool,

    /// Save a modified catalog when the session is dropped without close().
    /// Errors are logged, not returned.
    pub save_on_drop: bool,
}

impl Default for WordbookConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE),
            lock: true,
            save_on_drop: true,
        }
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl WordbookConfig {
    /// Load configuration from environment variables on top of defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("WORDBOOK_PATH") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.path = PathBuf::from(s);
            }
        }

        if let Some(on) = std::env::var("WORDBOOK_LOCK").ok().as_deref().and_then(parse_flag) {
            cfg.lock = on;
        }

        if let Some(on) = std::env::var("WORDBOOK_SAVE_ON_DROP")
            .ok()
            .as_deref()
            .and_then(parse_flag)
        {
            cfg.save_on_drop = on;
        }

        cfg
    }

    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_lock(mut self, on: bool) -> Self {
        self.lock = on;
        self
    }

    pub fn with_save_on_drop(mut self, on: bool) -> Self {
        self.save_on_drop = on;
        self
    }
}

impl fmt::Display for WordbookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WordbookConfig {{ path: {}, lock: {}, save_on_drop: {} }}",
            self.path.display(),
            self.lock,
            self.save_on_drop,
        )
    }
}

/// Lightweight builder that produces a WordbookConfig.
/// Session exposes `Session::builder()` returning this builder.
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    cfg: WordbookConfig,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: WordbookConfig::from_env(),
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: WordbookConfig::default(),
        }
    }

    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cfg.path = path.as_ref().to_path_buf();
        self
    }

    pub fn lock(mut self, on: bool) -> Self {
        self.cfg.lock = on;
        self
    }

    pub fn save_on_drop(mut self, on: bool) -> Self {
        self.cfg.save_on_drop = on;
        self
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> WordbookConfig {
        self.cfg
    }
}
