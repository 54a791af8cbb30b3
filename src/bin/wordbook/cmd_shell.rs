use anyhow::{Context, Result};
use std::io;

use wordbook::shell::{Shell, ShellExit};
use wordbook::WordbookConfig;

use super::util::open_session;

pub fn exec(cfg: WordbookConfig) -> Result<()> {
    let mut session = open_session(cfg)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    let exit = shell.run(&mut session).context("interactive shell i/o")?;
    drop(shell);

    let path = session.path().to_path_buf();
    session
        .close()
        .with_context(|| format!("save wordbook {}", path.display()))?;

    if exit == ShellExit::Eof {
        println!();
    }
    println!("saved {}, bye", path.display());
    Ok(())
}
