use anyhow::{Context, Result};
use serde::Serialize;

use wordbook::consts::MAX_WORDS;
use wordbook::lock::lock_file_path;
use wordbook::metrics::{self, MetricsSnapshot};
use wordbook::WordbookConfig;

use super::util::open_session_ro;

#[derive(Serialize)]
struct StatusReport {
    path: String,
    file_exists: bool,
    file_bytes: u64,
    lock_file: String,
    lock_file_exists: bool,
    entries: usize,
    capacity: usize,
    keys_normalized: bool,
    metrics: MetricsSnapshot,
}

pub fn exec(cfg: WordbookConfig, json: bool) -> Result<()> {
    let meta = std::fs::metadata(&cfg.path).ok();
    let lock_path = lock_file_path(&cfg.path);

    let session = open_session_ro(cfg)?;
    let cat = session.catalog();

    let report = StatusReport {
        path: session.path().display().to_string(),
        file_exists: meta.is_some(),
        file_bytes: meta.map(|m| m.len()).unwrap_or(0),
        lock_file: lock_path.display().to_string(),
        lock_file_exists: lock_path.exists(),
        entries: cat.len(),
        capacity: MAX_WORDS,
        keys_normalized: cat.keys_normalized(),
        metrics: metrics::snapshot(),
    };

    if json {
        let s = serde_json::to_string(&report).context("serialize status")?;
        println!("{}", s);
    } else {
        println!("wordbook: {}", report.path);
        println!(
            "  file: exists={} size={} B",
            report.file_exists, report.file_bytes
        );
        println!(
            "  lock: {} (exists={})",
            report.lock_file, report.lock_file_exists
        );
        println!("  entries: {}/{}", report.entries, report.capacity);
        println!("  keys_normalized: {}", report.keys_normalized);
        println!(
            "  metrics: loads={} saves={} save_failures={}",
            report.metrics.store_loads,
            report.metrics.store_saves,
            report.metrics.store_save_failures
        );
    }

    Ok(())
}
