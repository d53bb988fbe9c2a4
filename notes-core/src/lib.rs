pub mod category;
pub mod config;
pub mod error;
pub mod note;
pub mod notes;
pub mod parse_date;
pub mod paths;

#[cfg(test)]
mod tests;

pub use category::{Category, DEFAULT_CATEGORY};
pub use config::Config;
pub use error::NoteError;
pub use notes::{NewNote, Notes};
