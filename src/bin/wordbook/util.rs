use anyhow::{Context, Result};

use wordbook::{Outcome, Rejection, Session, WordbookConfig};

pub fn open_session(cfg: WordbookConfig) -> Result<Session> {
    let path = cfg.path.clone();
    Session::open_with_config(cfg)
        .with_context(|| format!("open wordbook {}", path.display()))
}

/// Для команд чтения: без lock и без записи.
pub fn open_session_ro(cfg: WordbookConfig) -> Result<Session> {
    let path = cfg.path.clone();
    Session::open_ro_with_config(cfg)
        .with_context(|| format!("open wordbook {} (read-only)", path.display()))
}

/// Печать результата мутации и сохранение. Rejection => ошибка (exit 1).
pub fn finish_mutation(
    session: Session,
    res: std::result::Result<Outcome, Rejection>,
) -> Result<()> {
    match res {
        Ok(outcome) => {
            let path = session.path().to_path_buf();
            session
                .close_if_dirty()
                .with_context(|| format!("save wordbook {}", path.display()))?;
            let msg = outcome.message();
            if msg.is_empty() {
                println!("OK");
            } else {
                println!("{}", msg);
            }
            Ok(())
        }
        Err(rejection) => Err(rejection.into()),
    }
}
