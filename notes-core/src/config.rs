use directories::BaseDirs;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    category::{Category, DEFAULT_CATEGORY},
    error::{NoteError, Result},
    parse_date::SeparatorSet,
};

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Clone)]
pub struct Config {
    /// File this configuration was read from.
    pub source: PathBuf,
    /// Characters accepted between the parts of a date expression.
    pub separators: SeparatorSet,
    /// Every table of the config file, keyed by category name.
    pub categories: HashMap<String, Category>,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    /// `"dashed"`, `"punctuated"` or a custom list of characters.
    separators: Option<String>,
    #[serde(flatten)]
    categories: HashMap<String, Category>,
}

impl Config {
    /// Public entrypoint: load the config from `explicit` if given. Otherwise use the
    /// first existing candidate (`./config.toml`, then XDG, then native).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::config_file_paths()
                .into_iter()
                .find(|candidate| candidate.exists())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };
        Self::from_path(&path)
    }

    /// Read and decode the config file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        log::debug!("reading config {}", path.display());
        let s = fs::read_to_string(path).map_err(|source| NoteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &s)
    }

    /// Decode TOML text; `source` is only used for reporting.
    pub fn parse(source: impl Into<PathBuf>, s: &str) -> Result<Self> {
        let source = source.into();
        let file_config = Self::parse_file(s).map_err(|error| NoteError::ConfigDecode {
            path: source.clone(),
            source: error,
        })?;

        let separators = match file_config.separators.as_deref() {
            Some(name) => SeparatorSet::from_str(name).map_err(|_| NoteError::InvalidSeparators)?,
            None => SeparatorSet::default(),
        };
        if separators.chars().is_empty() {
            return Err(NoteError::InvalidSeparators);
        }
        log::debug!("date separators: {}", separators.as_ref());

        Ok(Self {
            source,
            separators,
            categories: file_config.categories,
        })
    }

    /// Looks up `name` and fills its empty fields from the `default` category.
    pub fn category(&self, name: &str) -> Result<Category> {
        let default = self
            .categories
            .get(DEFAULT_CATEGORY)
            .ok_or(NoteError::DefaultCategoryNotFound)?;
        let category = self
            .categories
            .get(name)
            .ok_or_else(|| NoteError::CategoryNotFound(name.to_string()))?;

        log::debug!("using category '{name}'");
        Ok(category.or_fallback(default))
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("notes").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("notes").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    fn parse_file(s: &str) -> std::result::Result<FileConfig, toml::de::Error> {
        toml::from_str::<FileConfig>(s)
    }
}
