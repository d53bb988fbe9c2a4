use clap::{Args, Parser, Subcommand};
use notes_core::DEFAULT_CATEGORY;
use std::path::PathBuf;

/// notes — Manage personal notes
#[derive(Parser, Debug)]
#[command(name = "notes", version, about)]
pub struct Cli {
    /// Config file to read. Defaults to `./config.toml`.
    #[arg(long, short = 'C', global = true, env = "NOTES_CONFIG")]
    pub config: Option<PathBuf>,
    /// Report config and category failures as a generic error instead of in detail.
    #[arg(long, short, global = true)]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty note (e.g. `notes new -c work -d 2-20`)
    #[command(visible_alias = "n")]
    New(NewArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Category of the note, a table of the config file.
    #[arg(long, short, default_value = DEFAULT_CATEGORY)]
    pub category: String,
    /// Directory below the category's storage path.
    #[arg(long = "sub-directory", short = 'D')]
    pub sub_directory: Option<String>,
    /// Date of the note: a day (`20`), month and day (`2-20`, `2 20`) or a full date
    /// (`2023-02-20`). Defaults to today.
    #[arg(long, short, num_args(1..))]
    pub date: Vec<String>,
    /// Accepted for compatibility; has no effect.
    #[arg(long, short)]
    pub first_directory: bool,
    /// Accepted for compatibility; has no effect.
    #[arg(long, short)]
    pub new: bool,
    /// Accepted for compatibility; notes are never opened.
    #[arg(long, short = 'e')]
    pub open_editor: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
