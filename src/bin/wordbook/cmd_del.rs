use anyhow::Result;

use wordbook::WordbookConfig;

use super::util::{finish_mutation, open_session};

pub fn exec(cfg: WordbookConfig, word: String) -> Result<()> {
    let mut session = open_session(cfg)?;
    let res = session.delete(word.trim());
    finish_mutation(session, res)
}
