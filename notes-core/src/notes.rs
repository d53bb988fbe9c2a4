use chrono::NaiveDate;
use std::path::PathBuf;

use crate::{
    Config,
    category::DEFAULT_CATEGORY,
    error::Result,
    note::create_note,
    parse_date::{DateResolver, today},
    paths::note_path,
};

/// What to create: which category, an optional sub-directory and an optional date expression.
#[derive(Debug, Clone, Copy)]
pub struct NewNote<'a> {
    pub category: &'a str,
    pub sub_directory: Option<&'a str>,
    pub date: Option<&'a str>,
}

impl Default for NewNote<'_> {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY,
            sub_directory: None,
            date: None,
        }
    }
}

pub struct Notes {
    pub config: Config,
    /// "Today" for date expressions that leave out the year or month.
    pub reference_date: NaiveDate,
    resolver: DateResolver,
}

impl Notes {
    /// Creates a new `Notes` instance using today's local date as reference.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_reference_date(config, today())
    }

    /// Creates a new `Notes` instance with a fixed reference date.
    pub fn with_reference_date(config: Config, reference_date: NaiveDate) -> Result<Self> {
        let resolver = DateResolver::new(&config.separators)?;
        Ok(Self {
            config,
            reference_date,
            resolver,
        })
    }

    /// Resolves the date of a note. No expression means the reference date.
    pub fn resolve_date(&self, expression: Option<&str>) -> Result<NaiveDate> {
        match expression {
            Some(expression) => self.resolver.resolve(expression, self.reference_date),
            None => Ok(self.reference_date),
        }
    }

    /// Where the note described by `request` lives, without touching the filesystem.
    pub fn note_path(&self, request: &NewNote) -> Result<PathBuf> {
        let category = self.config.category(request.category)?;
        let date = self.resolve_date(request.date)?;
        note_path(&category, date, request.sub_directory)
    }

    /// Creates the empty note described by `request` and returns its path.
    pub fn create_note(&self, request: &NewNote) -> Result<PathBuf> {
        let path = self.note_path(request)?;
        create_note(&path)
    }
}
