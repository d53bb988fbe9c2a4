use super::silence;
use crate::cli::NewArgs;
use anyhow::Result;
use notes_core::{Config, NewNote, Notes};
use std::path::PathBuf;

/// `notes new`: resolve the category and date, then create the empty note.
pub fn new_mode(args: &NewArgs, config: Config, silent: bool) -> Result<PathBuf> {
    if args.first_directory || args.new || args.open_editor {
        log::debug!("--first-directory, --new and --open-editor have no effect");
    }

    let notes = Notes::new(config).map_err(|e| silence(e, silent))?;
    // Several tokens (`-d 2 20`) form a single expression.
    let date = (!args.date.is_empty()).then(|| args.date.join(" "));
    let request = NewNote {
        category: &args.category,
        sub_directory: args.sub_directory.as_deref(),
        date: date.as_deref(),
    };

    let path = notes.create_note(&request).map_err(|e| silence(e, silent))?;
    Ok(path)
}
