//! List filtering over materialised record collections.
//!
//! A [`RecordFilter`] is a conjunction of optional predicates. Each entity
//! kind opts in through [`Filterable`] by exposing which of its fields play
//! the status, type, owner, search, and date roles. A predicate whose field
//! the entity does not expose never matches, so a `type` filter on a kind
//! without a type yields an empty list rather than being ignored.

use chrono::NaiveDate;

/// Inclusive calendar-date bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest accepted date.
    pub start: Option<NaiveDate>,
    /// Latest accepted date.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Bounds from optional endpoints.
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Whether neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `date` falls within the bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Field roles an entity exposes to [`RecordFilter`].
pub trait Filterable {
    /// Lifecycle status label, e.g. `"active"`.
    fn status_label(&self) -> Option<&str> {
        None
    }

    /// Type or category label, e.g. `"Video"` or `"PMP"`.
    fn kind_label(&self) -> Option<&str> {
        None
    }

    /// Owning advertiser.
    fn advertiser_ref(&self) -> Option<&str> {
        None
    }

    /// Fields searched by free text.
    fn search_fields(&self) -> Vec<&str>;

    /// Date tested against [`RecordFilter::dates`].
    fn filter_date(&self) -> Option<NaiveDate> {
        None
    }
}

/// Conjunction of optional list predicates.
///
/// # Examples
/// ```
/// use adtech::domain::RecordFilter;
///
/// let filter = RecordFilter::default().with_status("active").with_search("tech");
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Exact status label.
    pub status: Option<String>,
    /// Exact type label.
    pub kind: Option<String>,
    /// Exact owning advertiser id.
    pub advertiser_id: Option<String>,
    /// Case-insensitive substring over the search fields.
    pub search: Option<String>,
    /// Inclusive date bounds.
    pub dates: DateRange,
}

impl RecordFilter {
    /// Require an exact status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Require an exact type label.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Require an owning advertiser.
    #[must_use]
    pub fn with_advertiser(mut self, advertiser_id: impl Into<String>) -> Self {
        self.advertiser_id = Some(advertiser_id.into());
        self
    }

    /// Require a free-text match.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Require the record date to fall within `dates`.
    #[must_use]
    pub const fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    /// Whether no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.kind.is_none()
            && self.advertiser_id.is_none()
            && self.search.is_none()
            && self.dates.is_unbounded()
    }

    /// Whether `record` satisfies every predicate.
    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        exact(self.status.as_deref(), record.status_label())
            && exact(self.kind.as_deref(), record.kind_label())
            && exact(self.advertiser_id.as_deref(), record.advertiser_ref())
            && self.matches_search(record)
            && self.matches_dates(record)
    }

    /// Keep the matching records, preserving order.
    pub fn apply<R: Filterable>(&self, mut records: Vec<R>) -> Vec<R> {
        if !self.is_empty() {
            records.retain(|record| self.matches(record));
        }
        records
    }

    fn matches_search<R: Filterable>(&self, record: &R) -> bool {
        let Some(needle) = self.search.as_deref() else {
            return true;
        };
        let needle = needle.to_lowercase();
        record
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_dates<R: Filterable>(&self, record: &R) -> bool {
        if self.dates.is_unbounded() {
            return true;
        }
        record
            .filter_date()
            .is_some_and(|date| self.dates.contains(date))
    }
}

fn exact(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}
