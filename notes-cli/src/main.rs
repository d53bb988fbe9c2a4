mod cli;
mod cli_modes;
mod logging;

use anyhow::Result;
use cli::{Cli, Command};
use cli_modes::{SilencedError, new_mode, silence};
use notes_core::{Config, NoteError};
use std::process::ExitCode;

/// A note already at the target path, or a silenced config failure.
const EXIT_REFUSED: u8 = 1;
const EXIT_FAILED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::new();
    logging::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| silence(e, cli.silent))?;

    match &cli.command {
        Command::New(args) => new_mode(args, config, cli.silent).map(|_| ()),
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(silenced) = err.downcast_ref::<SilencedError>() {
        log::warn!("{silenced}");
        return ExitCode::from(EXIT_REFUSED);
    }
    if let Some(exists @ NoteError::NoteAlreadyExists(_)) = err.downcast_ref::<NoteError>() {
        log::warn!("{exists}");
        return ExitCode::from(EXIT_REFUSED);
    }
    log::error!("{err:#}");
    ExitCode::from(EXIT_FAILED)
}
