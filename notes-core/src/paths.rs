use chrono::{NaiveDate, NaiveTime};
use directories::BaseDirs;
use std::{
    fmt::Write,
    path::{Path, PathBuf},
};

use crate::{
    category::Category,
    error::{NoteError, Result},
};

/// File name pattern used when a category leaves `filename` empty.
pub const DEFAULT_FILENAME: &str = "%Y-%m-%d";

/// `{path}/{sub_directory}/{date formatted with filename}{ext}`
pub fn note_path(
    category: &Category,
    date: NaiveDate,
    sub_directory: Option<&str>,
) -> Result<PathBuf> {
    let mut path = storage_root(&category.path);
    if let Some(sub) = sub_directory.filter(|s| !s.is_empty()) {
        path.push(sub);
    }
    path.push(note_file_name(date, &category.filename, &category.extension)?);
    Ok(path)
}

/// Formats `date` (at midnight) with a strftime `template` and appends `extension`.
/// The template may contain `/` to nest the note in folders.
pub fn note_file_name(date: NaiveDate, template: &str, extension: &str) -> Result<String> {
    let template = if template.is_empty() {
        DEFAULT_FILENAME
    } else {
        template
    };

    let mut name = String::new();
    write!(name, "{}", date.and_time(NaiveTime::MIN).format(template))
        .map_err(|_| NoteError::InvalidFilenameTemplate(template.to_string()))?;

    if !extension.is_empty() && !extension.starts_with('.') {
        name.push('.');
    }
    name.push_str(extension);
    Ok(name)
}

/// Expand a leading `~` to the home directory. An empty path is the working directory.
pub fn storage_root(path: &str) -> PathBuf {
    let home = || BaseDirs::new().map(|b| b.home_dir().to_path_buf());
    match path {
        "" => PathBuf::new(),
        "~" => home().unwrap_or_else(|| PathBuf::from(path)),
        _ => match path.strip_prefix("~/") {
            Some(rest) => home()
                .map(|h| h.join(rest))
                .unwrap_or_else(|| PathBuf::from(path)),
            None => Path::new(path).to_path_buf(),
        },
    }
}
