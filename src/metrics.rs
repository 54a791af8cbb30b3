//! Lightweight global metrics for wordbook.
//!
//! Потокобезопасные атомарные счётчики:
//! - catalog mutations (add/update/delete + rejections)
//! - searches
//! - store load/save

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

// ----- Catalog -----
static WORDS_ADDED: AtomicU64 = AtomicU64::new(0);
static WORDS_UPDATED: AtomicU64 = AtomicU64::new(0);
static WORDS_DELETED: AtomicU64 = AtomicU64::new(0);
static REJECTIONS: AtomicU64 = AtomicU64::new(0);
static SEARCHES: AtomicU64 = AtomicU64::new(0);

// ----- Store -----
static STORE_LOADS: AtomicU64 = AtomicU64::new(0);
static STORE_SAVES: AtomicU64 = AtomicU64::new(0);
static STORE_SAVE_FAILURES: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricsSnapshot {
    pub words_added: u64,
    pub words_updated: u64,
    pub words_deleted: u64,
    pub rejections: u64,
    pub searches: u64,

    pub store_loads: u64,
    pub store_saves: u64,
    pub store_save_failures: u64,
}

// ----- Recorders (Catalog) -----
pub fn record_word_added() {
    WORDS_ADDED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_word_updated() {
    WORDS_UPDATED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_word_deleted() {
    WORDS_DELETED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_rejection() {
    REJECTIONS.fetch_add(1, Ordering::Relaxed);
}
pub fn record_search() {
    SEARCHES.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (Store) -----
pub fn record_store_load() {
    STORE_LOADS.fetch_add(1, Ordering::Relaxed);
}
pub fn record_store_save() {
    STORE_SAVES.fetch_add(1, Ordering::Relaxed);
}
pub fn record_store_save_failed() {
    STORE_SAVE_FAILURES.fetch_add(1, Ordering::Relaxed);
}

// ----- Snapshot / Reset -----
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        words_added: WORDS_ADDED.load(Ordering::Relaxed),
        words_updated: WORDS_UPDATED.load(Ordering::Relaxed),
        words_deleted: WORDS_DELETED.load(Ordering::Relaxed),
        rejections: REJECTIONS.load(Ordering::Relaxed),
        searches: SEARCHES.load(Ordering::Relaxed),

        store_loads: STORE_LOADS.load(Ordering::Relaxed),
        store_saves: STORE_SAVES.load(Ordering::Relaxed),
        store_save_failures: STORE_SAVE_FAILURES.load(Ordering::Relaxed),
    }
}

pub fn reset() {
    WORDS_ADDED.store(0, Ordering::Relaxed);
    WORDS_UPDATED.store(0, Ordering::Relaxed);
    WORDS_DELETED.store(0, Ordering::Relaxed);
    REJECTIONS.store(0, Ordering::Relaxed);
    SEARCHES.store(0, Ordering::Relaxed);

    STORE_LOADS.store(0, Ordering::Relaxed);
    STORE_SAVES.store(0, Ordering::Relaxed);
    STORE_SAVE_FAILURES.store(0, Ordering::Relaxed);
}
