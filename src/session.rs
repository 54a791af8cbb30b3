//! session — lifecycle of one wordbook: construct → load → operate → save → dispose.
//!
//! Session владеет конфигом (путь к файлу), каталогом и (опционально) lock-гардом.
//! Операции каталога проходят через Session: она ведёт флаг dirty и метрики.
//!
//! RO-сессия (open_ro_with_config): без lock-файла и без записи на диск.
//! Её используют list/search/stats/status.
//!
//! Закрытие:
//! - close()          — сохранить всегда (как выход из меню);
//! - close_if_dirty() — сохранить только если были изменения (one-shot команды);
//! - Drop без close   — при save_on_drop=true best-effort save грязного каталога,
//!   ошибки только логируются.

use log::{error, info, warn};
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, Order, Outcome, Rejection, Statistics};
use crate::config::{SessionBuilder, WordbookConfig};
use crate::consts::MAX_WORDS;
use crate::lock::{lock_file_path, try_acquire_exclusive_lock, LockGuard};
use crate::metrics::{
    record_rejection, record_search, record_word_added, record_word_deleted, record_word_updated,
};
use crate::store::{self, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Another session holds `<path>.lock`.
    #[error("wordbook {} is in use by another session (lock {})", .path.display(), .lock.display())]
    Locked { path: PathBuf, lock: PathBuf },
    /// The lock file itself could not be opened.
    #[error("cannot open lock file {}: {source}", .lock.display())]
    LockIo {
        lock: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Persisting through a session opened read-only.
    #[error("wordbook {} is opened read-only", .path.display())]
    ReadOnly { path: PathBuf },
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct Session {
    cfg: WordbookConfig,
    catalog: Catalog,
    dirty: bool,
    closed: bool,
    readonly: bool,
    _lock: Option<LockGuard>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Open the wordbook at `path` using env configuration for everything else.
    pub fn open(path: &Path) -> Result<Self, SessionError> {
        Self::open_with_config(WordbookConfig::from_env().with_path(path))
    }

    pub fn open_with_config(cfg: WordbookConfig) -> Result<Self, SessionError> {
        let lock = if cfg.lock {
            Some(acquire_session_lock(&cfg.path)?)
        } else {
            None
        };

        let catalog = load_checked(&cfg.path)?;
        info!(
            "session open: {} ({} entries)",
            cfg.path.display(),
            catalog.len()
        );

        Ok(Self {
            cfg,
            catalog,
            dirty: false,
            closed: false,
            readonly: false,
            _lock: lock,
        })
    }

    /// Open without the lock and without ever writing back.
    ///
    /// `cfg.lock` and `cfg.save_on_drop` are ignored. Nothing is created on disk,
    /// so a read-only session can run next to a locked writer.
    pub fn open_ro_with_config(cfg: WordbookConfig) -> Result<Self, SessionError> {
        let catalog = load_checked(&cfg.path)?;
        info!(
            "session open (ro): {} ({} entries)",
            cfg.path.display(),
            catalog.len()
        );

        Ok(Self {
            cfg,
            catalog,
            dirty: false,
            closed: false,
            readonly: true,
            _lock: None,
        })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.cfg.path
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True when the in-memory catalog differs from the last save/load.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn has_lock(&self) -> bool {
        self._lock.is_some()
    }

    #[inline]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    // ----------------- catalog operations -----------------

    pub fn add(&mut self, word: &str, meaning: &str) -> Result<Outcome, Rejection> {
        let res = self.catalog.add(word, meaning);
        self.track(&res, record_word_added);
        res
    }

    pub fn update(&mut self, word: &str, new_meaning: &str) -> Result<Outcome, Rejection> {
        let res = self.catalog.update(word, new_meaning);
        self.track(&res, record_word_updated);
        res
    }

    pub fn delete(&mut self, word: &str) -> Result<Outcome, Rejection> {
        let res = self.catalog.delete(word);
        self.track(&res, record_word_deleted);
        res
    }

    pub fn search(&self, keyword: &str) -> Vec<(String, String)> {
        record_search();
        self.catalog.search(keyword)
    }

    pub fn list(&self, order: Order) -> Vec<(String, String)> {
        self.catalog.list(order)
    }

    pub fn statistics(&self) -> Statistics {
        self.catalog.statistics()
    }

    fn track(&mut self, res: &Result<Outcome, Rejection>, on_ok: fn()) {
        match res {
            Ok(_) => {
                self.dirty = true;
                on_ok();
            }
            Err(_) => record_rejection(),
        }
    }

    // ----------------- persistence -----------------

    /// Write the catalog to the configured path.
    pub fn save(&mut self) -> Result<(), SessionError> {
        if self.readonly {
            return Err(SessionError::ReadOnly {
                path: self.cfg.path.clone(),
            });
        }
        store::save(&self.cfg.path, &self.catalog)?;
        self.dirty = false;
        Ok(())
    }

    /// Save unconditionally and dispose of the session.
    pub fn close(mut self) -> Result<(), SessionError> {
        self.closed = true;
        self.save()?;
        info!("session closed: {} saved", self.cfg.path.display());
        Ok(())
    }

    /// Save only if something changed. Returns whether a save happened.
    pub fn close_if_dirty(mut self) -> Result<bool, SessionError> {
        self.closed = true;
        if !self.dirty {
            info!("session closed: {} unchanged", self.cfg.path.display());
            return Ok(false);
        }
        self.save()?;
        info!("session closed: {} saved", self.cfg.path.display());
        Ok(true)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.closed || !self.dirty {
            return;
        }
        if self.readonly || !self.cfg.save_on_drop {
            warn!(
                "session dropped with unsaved changes; discarding ({})",
                self.cfg.path.display()
            );
            return;
        }
        warn!(
            "session dropped without close; saving {}",
            self.cfg.path.display()
        );
        if let Err(e) = store::save(&self.cfg.path, &self.catalog) {
            error!("save on drop failed: {e}");
        }
    }
}

/// Load and warn about entries that break the catalog invariants.
fn load_checked(path: &Path) -> Result<Catalog, StoreError> {
    let catalog = store::load(path)?;
    if catalog.len() > MAX_WORDS {
        warn!(
            "wordbook {} holds {} entries (limit {}); adds will be rejected",
            path.display(),
            catalog.len(),
            MAX_WORDS
        );
    }
    if !catalog.keys_normalized() {
        warn!(
            "wordbook {} contains non-lowercase words; they will not match lookups",
            path.display()
        );
    }
    Ok(catalog)
}

fn acquire_session_lock(path: &Path) -> Result<LockGuard, SessionError> {
    let lock = lock_file_path(path);
    match try_acquire_exclusive_lock(path) {
        Ok(g) => Ok(g),
        Err(e) if is_contended(&e) => Err(SessionError::Locked {
            path: path.to_path_buf(),
            lock,
        }),
        Err(source) => Err(SessionError::LockIo { lock, source }),
    }
}

fn is_contended(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::WouldBlock
        || e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}
