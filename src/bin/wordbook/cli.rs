use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI для wordbook: интерактивное меню (по умолчанию) и one-shot команды
#[derive(Parser, Debug)]
#[command(name = "wordbook", version, about = "Personal vocabulary book (up to 5 words)")]
pub struct Cli {
    /// Wordbook JSON file. Overrides WORDBOOK_PATH (default ./wordbook.json).
    #[arg(long, global = true)]
    pub path: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Interactive menu loop (default). Saves on exit.
    Shell,
    /// Add a word (stored lowercase) with its meaning
    Add {
        #[arg(long)]
        word: String,
        #[arg(long)]
        meaning: String,
    },
    /// Prefix search; without --keyword prints every entry
    Search {
        #[arg(long, default_value = "")]
        keyword: String,
    },
    /// Replace the meaning of an existing word
    Update {
        #[arg(long)]
        word: String,
        #[arg(long)]
        meaning: String,
    },
    /// Delete a word
    Del {
        #[arg(long)]
        word: String,
    },
    /// List all entries sorted by word
    List {
        /// Descending order
        #[arg(long, default_value_t = false)]
        desc: bool,
    },
    /// Word count, longest word, words by length
    Stats {
        /// JSON output (single object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print config, file and metrics summary
    Status {
        /// JSON output (single object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Cli as Parser>::parse()
    }
}
