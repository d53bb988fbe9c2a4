mod new_mode;

pub use new_mode::new_mode;

use notes_core::NoteError;
use thiserror::Error;

/// Stands in for config and category failures when `--silent` is set.
#[derive(Error, Debug)]
#[error("notes configuration unavailable")]
pub struct SilencedError;

/// With `silent`, config and category failures lose their details.
pub fn silence(err: NoteError, silent: bool) -> anyhow::Error {
    if silent && err.is_config_failure() {
        log::debug!("silenced: {err}");
        SilencedError.into()
    } else {
        err.into()
    }
}
