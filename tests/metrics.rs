// tests/metrics.rs
//
// Счётчики глобальные на процесс, поэтому в этом бинаре ровно один тест:
// параллельные тесты иначе мешали бы друг другу.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use wordbook::metrics::{self, MetricsSnapshot};
use wordbook::{Rejection, Session, SessionBuilder, SessionError};

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("wordbook-metrics-{prefix}-{pid}-{t}"))
}

fn assert_counts(m: &MetricsSnapshot, expected: [u64; 8]) {
    let got = [
        m.words_added,
        m.words_updated,
        m.words_deleted,
        m.rejections,
        m.searches,
        m.store_loads,
        m.store_saves,
        m.store_save_failures,
    ];
    assert_eq!(
        got, expected,
        "[added, updated, deleted, rejections, searches, loads, saves, save_failures]"
    );
}

#[test]
fn session_and_store_update_counters() -> Result<()> {
    metrics::reset();
    assert_counts(&metrics::snapshot(), [0; 8]);

    let root = unique_root("counters");
    let path = root.join("wb.json");
    let cfg = SessionBuilder::from_default()
        .path(&path)
        .save_on_drop(false)
        .build();

    // файла нет: load не считается
    let mut s = Session::open_with_config(cfg.clone())?;
    assert_counts(&metrics::snapshot(), [0; 8]);

    s.add("apple", "a fruit").unwrap();
    s.add("banana", "a tropical fruit").unwrap();
    assert_eq!(s.add("APPLE", "dup"), Err(Rejection::DuplicateWord));
    s.update("apple", "a red fruit").unwrap();
    assert_eq!(s.update("ghost", "x"), Err(Rejection::NotFound));
    s.delete("banana").unwrap();
    assert_eq!(s.search("app").len(), 1);
    assert_counts(&metrics::snapshot(), [2, 1, 1, 2, 1, 0, 0, 0]);

    s.save()?;
    assert_counts(&metrics::snapshot(), [2, 1, 1, 2, 1, 0, 1, 0]);

    // существующий файл: load считается; отказ RO-сессии не трогает store
    let mut reader = Session::open_ro_with_config(cfg)?;
    assert_eq!(reader.catalog().get("apple"), Some("a red fruit"));
    assert!(matches!(reader.save(), Err(SessionError::ReadOnly { .. })));
    assert_counts(&metrics::snapshot(), [2, 1, 1, 2, 1, 1, 1, 0]);

    // на месте файла директория: save падает
    fs::remove_file(&path)?;
    fs::create_dir_all(&path)?;
    s.add("cherry", "red").unwrap();
    assert!(s.save().is_err());
    assert_counts(&metrics::snapshot(), [3, 1, 1, 2, 1, 1, 1, 1]);

    metrics::reset();
    assert_counts(&metrics::snapshot(), [0; 8]);
    Ok(())
}
