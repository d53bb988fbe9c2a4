use chrono::{Datelike, Days, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumString};

use crate::error::{NoteError, Result};

const DAY_PATTERN: &str = "(?P<Date>0?[1-9]|[12][0-9]|3[01])";
const MONTH_PATTERN: &str = "(?P<Month>0?[1-9]|1[0-2])";
const YEAR_PATTERN: &str = "(?P<Year>[0-9]{2}|[0-9]{4})";

/// Characters accepted between the components of a date expression.
///
/// Parsed from the `separators` key of the config file:
/// - `"dashed"` (default): space and hyphen, e.g. `2 20`, `2023-02-20`.
/// - `"punctuated"`: dot, hyphen, underscore and slash, e.g. `2023.02.20`, `2/20`.
/// - anything else: every character of the string is a separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SeparatorSet {
    #[default]
    Dashed,
    Punctuated,
    #[strum(default)]
    Custom(String),
}

impl SeparatorSet {
    pub fn chars(&self) -> Vec<char> {
        match self {
            SeparatorSet::Dashed => vec![' ', '-'],
            SeparatorSet::Punctuated => vec!['.', '-', '_', '/'],
            SeparatorSet::Custom(chars) => chars.chars().collect(),
        }
    }

    /// A regex character class matching exactly one separator.
    fn class(&self) -> String {
        let escaped: String = self
            .chars()
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        format!("[{escaped}]")
    }
}

/// Which of the accepted shapes a date expression matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DateForm {
    /// `20`
    Day,
    /// `2-20`
    MonthDay,
    /// `2023-2-20`, `23-02-20`
    YearMonthDay,
}

/// Resolves loosely written dates against a reference date.
///
/// The three shapes are tried in order (day, month-day, year-month-day) and
/// the first one matching the whole trimmed input wins. Fields missing from
/// the expression come from the reference date.
#[derive(Debug, Clone)]
pub struct DateResolver {
    separators: SeparatorSet,
    day: Regex,
    month_day: Regex,
    year_month_day: Regex,
}

static DEFAULT_RESOLVER: Lazy<DateResolver> = Lazy::new(|| {
    DateResolver::new(&SeparatorSet::Dashed).expect("dashed separators form a valid pattern")
});

impl DateResolver {
    pub fn new(separators: &SeparatorSet) -> Result<Self> {
        if separators.chars().is_empty() {
            return Err(NoteError::InvalidSeparators);
        }
        let sep = separators.class();
        let compile = |pattern: String| {
            Regex::new(&format!("^{pattern}$")).map_err(|_| NoteError::InvalidSeparators)
        };

        Ok(Self {
            separators: separators.clone(),
            day: compile(DAY_PATTERN.to_string())?,
            month_day: compile(format!("{MONTH_PATTERN}{sep}{DAY_PATTERN}"))?,
            year_month_day: compile(format!(
                "{YEAR_PATTERN}{sep}{MONTH_PATTERN}{sep}{DAY_PATTERN}"
            ))?,
        })
    }

    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Returns the shape `expression` matches, if any.
    pub fn matched_form(&self, expression: &str) -> Option<DateForm> {
        let input = expression.trim();
        if self.day.is_match(input) {
            Some(DateForm::Day)
        } else if self.month_day.is_match(input) {
            Some(DateForm::MonthDay)
        } else if self.year_month_day.is_match(input) {
            Some(DateForm::YearMonthDay)
        } else {
            None
        }
    }

    /// Parses `expression` into a calendar date, completing it with `reference`.
    ///
    /// A day past the end of its month rolls forward into the next month
    /// (`4-31` is the 1st of May). Two digit years are taken literally
    /// (`23-02-20` is in year 23).
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use notes_core::parse_date::{DateResolver, SeparatorSet};
    /// let resolver = DateResolver::new(&SeparatorSet::Dashed).unwrap();
    /// let reference = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    ///
    /// let day = resolver.resolve("20", reference).unwrap();
    /// assert_eq!(day, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    ///
    /// let month_day = resolver.resolve("2 20", reference).unwrap();
    /// assert_eq!(month_day, NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
    ///
    /// assert!(resolver.resolve("yesterday", reference).is_err());
    /// ```
    pub fn resolve(&self, expression: &str, reference: NaiveDate) -> Result<NaiveDate> {
        let input = expression.trim();
        let unrecognized = || NoteError::UnrecognizedDate(expression.to_string());

        let fields = if let Some(caps) = self.day.captures(input) {
            field::<u32>(&caps, "Date").map(|day| (reference.year(), reference.month(), day))
        } else if let Some(caps) = self.month_day.captures(input) {
            field::<u32>(&caps, "Month")
                .zip(field::<u32>(&caps, "Date"))
                .map(|(month, day)| (reference.year(), month, day))
        } else if let Some(caps) = self.year_month_day.captures(input) {
            match (
                field::<i32>(&caps, "Year"),
                field::<u32>(&caps, "Month"),
                field::<u32>(&caps, "Date"),
            ) {
                (Some(year), Some(month), Some(day)) => Some((year, month, day)),
                _ => None,
            }
        } else {
            None
        };
        let (year, month, day) = fields.ok_or_else(unrecognized)?;

        let date = build_date(year, month, day).ok_or_else(unrecognized)?;
        log::debug!("resolved date expression '{input}' to {date}");
        Ok(date)
    }
}

impl Default for DateResolver {
    fn default() -> Self {
        DEFAULT_RESOLVER.clone()
    }
}

/// Resolves `expression` with the default (space and hyphen) separators.
pub fn resolve_date(expression: &str, reference: NaiveDate) -> Result<NaiveDate> {
    DEFAULT_RESOLVER.resolve(expression, reference)
}

/// Today's local date, the reference for expressions that omit fields.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn field<T: FromStr>(caps: &Captures, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse().ok()
}

/// First of the month plus `day - 1` days, so overflowing days spill into the next month.
fn build_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let offset = u64::from(day.checked_sub(1)?);
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(offset))
}
