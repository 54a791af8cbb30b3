use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use wordbook::{Order, Rejection, Session, SessionBuilder};

#[test]
fn smoke_add_search_update_delete_persist() -> Result<()> {
    let root = unique_root("smoke");
    fs::create_dir_all(&root)?;
    let path = root.join("wordbook.json");
    let cfg = SessionBuilder::from_default().path(&path).build();

    // 1) пустой старт: файла нет
    {
        let mut s = Session::open_with_config(cfg.clone())?;
        assert!(s.catalog().is_empty());

        s.add("Apple", "a fruit").unwrap();
        s.add("banana", "a tropical fruit").unwrap();
        s.add("cherry", "Red").unwrap();
        assert_eq!(s.add("APPLE", "dup"), Err(Rejection::DuplicateWord));

        let hits = s.search("app");
        assert_eq!(hits, vec![("apple".to_string(), "a fruit".to_string())]);
        s.close()?;
    }

    // 2) reopen: данные на месте, update/delete
    {
        let mut s = Session::open_with_config(cfg)?;
        assert_eq!(s.catalog().len(), 3);
        assert_eq!(s.catalog().get("cherry"), Some("Red"));

        s.update("Cherry", "a small stone fruit").unwrap();
        s.delete("banana").unwrap();
        assert_eq!(s.delete("banana"), Err(Rejection::NotFound));
        s.close()?;
    }

    // 3) final state, через Session::open (остальное из env)
    {
        let s = Session::open(&path)?;
        let words: Vec<_> = s.list(Order::Ascending).into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, ["apple", "cherry"]);
        assert_eq!(s.catalog().get("cherry"), Some("a small stone fruit"));
        assert!(!s.close_if_dirty()?, "nothing changed, nothing saved");
    }

    let text = fs::read_to_string(&path)?;
    assert_eq!(
        text,
        "{\n    \"apple\": \"a fruit\",\n    \"cherry\": \"a small stone fruit\"\n}\n"
    );

    Ok(())
}

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("wordbook-{}-{}-{}", prefix, pid, t))
}
