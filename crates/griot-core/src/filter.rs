//! Generic filterable collection.
//!
//! Every listing in the console (requests, families, contents, users) is
//! narrowed with the same three predicates, AND-combined:
//!
//! - free text: case-insensitive substring over a record's search fields,
//!   OR-combined across fields;
//! - date: a day-granularity cutoff or an exact day, compared as strings
//!   against the record's ISO-8601 date field;
//! - category: equality against a denormalized label, case-insensitive.
//!
//! An absent predicate passes everything through. Results keep the input
//! order and only ever contain input elements.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::clock::Clock;
use crate::store::Snapshot;

/// Layout of the day-granularity cutoffs compared against date fields.
const DAY_FORMAT: &str = "%Y-%m-%d";

/// A record that can be narrowed by a [`ViewQuery`].
pub trait Filterable {
    /// Fields searched by free text. `None` counts as an empty field.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// ISO-8601 date text used by date predicates.
    fn date_field(&self) -> Option<&str> {
        None
    }

    /// Denormalized category label compared by `category_equals`.
    fn category_label(&self) -> Option<&str> {
        None
    }
}

/// Date predicate over a record's ISO-8601 date text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatePredicate {
    /// Keeps dates that sort at or after this `YYYY-MM-DD` cutoff.
    ///
    /// The comparison is lexicographic on the raw text. Timestamps whose
    /// offset moves them across midnight are classified by their written
    /// day, not by the instant they denote.
    Since(String),
    /// Keeps dates whose text starts with this `YYYY-MM-DD` day.
    OnDay(String),
}

impl DatePredicate {
    /// Cutoff at "today minus `days`".
    #[must_use]
    pub fn since_days_ago(clock: &dyn Clock, days: u32) -> Self {
        let cutoff = clock
            .today()
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self::Since(cutoff.format(DAY_FORMAT).to_string())
    }

    /// Exact-day predicate.
    #[must_use]
    pub fn on_day(day: NaiveDate) -> Self {
        Self::OnDay(day.format(DAY_FORMAT).to_string())
    }

    /// Records without a date never pass a date predicate.
    #[must_use]
    pub fn admits(&self, date: Option<&str>) -> bool {
        let Some(date) = date.filter(|d| !d.is_empty()) else {
            return false;
        };
        match self {
            Self::Since(cutoff) => date >= cutoff.as_str(),
            Self::OnDay(day) => date.starts_with(day.as_str()),
        }
    }
}

/// Creation-period choices offered by the family directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    /// No date restriction.
    #[default]
    All,
    /// Created within the last 7 days.
    LastWeek,
    /// Created within the last 30 days.
    LastMonth,
}

impl Period {
    /// Number of days covered, `None` for [`Period::All`].
    #[must_use]
    pub fn days(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::LastWeek => Some(7),
            Self::LastMonth => Some(30),
        }
    }

    /// The date predicate this period implies today.
    #[must_use]
    pub fn predicate(self, clock: &dyn Clock) -> Option<DatePredicate> {
        self.days().map(|days| DatePredicate::since_days_ago(clock, days))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::LastWeek => "last_week",
            Self::LastMonth => "last_month",
        })
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "last_week" => Ok(Self::LastWeek),
            "last_month" => Ok(Self::LastMonth),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

/// Predicates applied by [`derive_view`]. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Free-text needle.
    pub text: Option<String>,
    /// Date predicate.
    pub date: Option<DatePredicate>,
    /// Resolved category label.
    pub category_equals: Option<String>,
}

impl ViewQuery {
    /// Sets the free-text needle.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the date predicate.
    #[must_use]
    pub fn with_date(mut self, date: Option<DatePredicate>) -> Self {
        self.date = date;
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, label: Option<String>) -> Self {
        self.category_equals = label;
        self
    }

    /// Whether `item` passes every present predicate.
    #[must_use]
    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        if let Some(needle) = self.text.as_deref().and_then(normalize_needle) {
            if !text_matches(&needle, &item.search_fields()) {
                return false;
            }
        }
        if let Some(date) = &self.date {
            if !date.admits(item.date_field()) {
                return false;
            }
        }
        if let Some(label) = &self.category_equals {
            let own = item.category_label().unwrap_or_default();
            if own.to_lowercase() != label.to_lowercase() {
                return false;
            }
        }
        true
    }
}

/// Lower-cases and trims a search needle; blank needles yield `None`.
#[must_use]
pub fn normalize_needle(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Whether any field contains the (already normalized) needle.
#[must_use]
pub fn text_matches(needle: &str, fields: &[Option<&str>]) -> bool {
    fields
        .iter()
        .any(|field| field.unwrap_or_default().to_lowercase().contains(needle))
}

/// Filters `items` with `query`, keeping input order.
#[must_use]
pub fn derive_view<'a, T: Filterable>(items: &'a [T], query: &ViewQuery) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}

/// A row of a lookup table that maps a foreign key to a category label.
pub trait CategorySource {
    /// The key the operator selects.
    fn category_key(&self) -> i64;

    /// The label stored on the records being filtered.
    fn category_name(&self) -> Option<&str>;
}

/// Resolves a selected key to its label. Unknown keys resolve to `None`,
/// which leaves the category predicate unset.
#[must_use]
pub fn resolve_category<S: CategorySource>(key: i64, table: &[S]) -> Option<String> {
    table
        .iter()
        .find(|row| row.category_key() == key)
        .and_then(|row| row.category_name().map(str::to_owned))
}

/// Filtered projection of a canonical snapshot.
///
/// Holds the shared container and the positions that passed, so reading
/// the view never copies or detaches records from the canonical list.
#[derive(Debug, Clone)]
pub struct DerivedView<T> {
    snapshot: Snapshot<T>,
    positions: Vec<usize>,
}

impl<T> DerivedView<T> {
    /// Keeps the snapshot items for which `keep` returns `true`.
    pub fn from_snapshot(snapshot: Snapshot<T>, keep: impl Fn(&T) -> bool) -> Self {
        let positions = snapshot
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| keep(item))
            .map(|(index, _)| index)
            .collect();
        Self { snapshot, positions }
    }

    /// Iterates over the visible records in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.positions.iter().map(|&index| &self.snapshot.items()[index])
    }

    /// Number of visible records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no record is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Revision of the snapshot this view was derived from.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.snapshot.revision()
    }
}
