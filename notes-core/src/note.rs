use std::{
    fs::{self, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::error::{NoteError, Result};

/// Creates an empty note at `path`, along with any missing parent directories.
///
/// Fails with [`NoteError::NoteAlreadyExists`] if anything is already at `path`
/// (including a dangling symlink); nothing is created in that case.
pub fn create_note(path: &Path) -> Result<PathBuf> {
    if fs::symlink_metadata(path).is_ok() {
        return Err(NoteError::NoteAlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| NoteError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => NoteError::NoteAlreadyExists(path.to_path_buf()),
            _ => NoteError::FileCreate {
                path: path.to_path_buf(),
                source,
            },
        })?;

    log::info!("note {} created", path.display());
    Ok(path.to_path_buf())
}
