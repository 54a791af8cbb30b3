use anyhow::{Context, Result};

use wordbook::shell::format_statistics;
use wordbook::WordbookConfig;

use super::util::open_session_ro;

pub fn exec(cfg: WordbookConfig, json: bool) -> Result<()> {
    let session = open_session_ro(cfg)?;
    let st = session.statistics();
    if json {
        let s = serde_json::to_string(&st).context("serialize statistics")?;
        println!("{}", s);
    } else {
        println!("{}", format_statistics(&st));
    }
    Ok(())
}
