//! Error kinds surfaced by note creation.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("reading config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("decoding config {}: {source}", path.display())]
    ConfigDecode {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("separator set must contain at least one character")]
    InvalidSeparators,

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("default category not found")]
    DefaultCategoryNotFound,

    #[error("unrecognized date: '{0}'")]
    UnrecognizedDate(String),

    #[error("invalid filename template: '{0}'")]
    InvalidFilenameTemplate(String),

    #[error("note already exist: {}", .0.display())]
    NoteAlreadyExists(PathBuf),

    #[error("creating directory {}: {source}", path.display())]
    DirectoryCreate { path: PathBuf, source: io::Error },

    #[error("creating file {}: {source}", path.display())]
    FileCreate { path: PathBuf, source: io::Error },
}

impl NoteError {
    /// Failures that come from loading the configuration or looking up a category in it.
    pub fn is_config_failure(&self) -> bool {
        matches!(
            self,
            NoteError::ConfigRead { .. }
                | NoteError::ConfigDecode { .. }
                | NoteError::InvalidSeparators
                | NoteError::CategoryNotFound(_)
                | NoteError::DefaultCategoryNotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;
