use anyhow::Result;
use env_logger::{Builder, Env};

use wordbook::WordbookConfig;

mod cli;
mod util;
mod cmd_add;
mod cmd_search;
mod cmd_update;
mod cmd_del;
mod cmd_list;
mod cmd_stats;
mod cmd_status;
mod cmd_shell;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — warn (stderr не мешает меню).
    // Пример: RUST_LOG=debug ./wordbook list
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();

    let mut cfg = WordbookConfig::from_env();
    if let Some(p) = cli.path {
        cfg = cfg.with_path(p);
    }

    match cli.cmd.unwrap_or(cli::Cmd::Shell) {
        cli::Cmd::Shell =>
            cmd_shell::exec(cfg),

        cli::Cmd::Add { word, meaning } =>
            cmd_add::exec(cfg, word, meaning),

        cli::Cmd::Search { keyword } =>
            cmd_search::exec(cfg, keyword),

        cli::Cmd::Update { word, meaning } =>
            cmd_update::exec(cfg, word, meaning),

        cli::Cmd::Del { word } =>
            cmd_del::exec(cfg, word),

        cli::Cmd::List { desc } =>
            cmd_list::exec(cfg, desc),

        cli::Cmd::Stats { json } =>
            cmd_stats::exec(cfg, json),

        cli::Cmd::Status { json } =>
            cmd_status::exec(cfg, json),
    }
}
