use anyhow::Result;

use wordbook::shell::format_entry;
use wordbook::{Order, WordbookConfig};

use super::util::open_session_ro;

pub fn exec(cfg: WordbookConfig, desc: bool) -> Result<()> {
    let session = open_session_ro(cfg)?;
    let entries = session.list(Order::from_ascending(!desc));
    if entries.is_empty() {
        println!("(no words)");
    }
    for (w, m) in &entries {
        println!("{}", format_entry(w, m));
    }
    Ok(())
}
