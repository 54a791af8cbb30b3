use anyhow::Result;

use wordbook::shell::format_entry;
use wordbook::WordbookConfig;

use super::util::open_session_ro;

pub fn exec(cfg: WordbookConfig, keyword: String) -> Result<()> {
    let session = open_session_ro(cfg)?;
    let hits = session.search(keyword.trim());
    if hits.is_empty() {
        println!("word not found");
    } else {
        for (w, m) in &hits {
            println!("{}", format_entry(w, m));
        }
    }
    Ok(())
}
