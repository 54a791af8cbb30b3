use anyhow::Result;

use wordbook::WordbookConfig;

use super::util::{finish_mutation, open_session};

pub fn exec(cfg: WordbookConfig, word: String, meaning: String) -> Result<()> {
    let mut session = open_session(cfg)?;
    let res = session.add(word.trim(), meaning.trim());
    finish_mutation(session, res)
}
