//! Dashboard filter state
//!
//! `FormFields` is the raw draft typed into the filter form; `FilterState` is
//! the committed query the dashboard last requested. Every transition returns
//! a new `FilterState`, so the page component only ever swaps whole values.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::protocol::{DEFAULT_PAGE_SIZE, DEFAULT_RANGE_DAYS};
use crate::DashboardQuery;

/// Format produced by `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Raw values of the filter form, before normalisation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub platform: String,
    /// `YYYY-MM-DD` or empty
    pub start_date: String,
    /// `YYYY-MM-DD` or empty
    pub end_date: String,
    pub source_id: String,
}

impl FormFields {
    /// Form contents on page load: the last week up to and including `today`
    pub fn with_default_range(today: NaiveDate) -> Self {
        let week_ago = today - Duration::days(DEFAULT_RANGE_DAYS);
        Self {
            start_date: week_ago.format(DATE_INPUT_FORMAT).to_string(),
            end_date: today.format(DATE_INPUT_FORMAT).to_string(),
            ..Self::default()
        }
    }
}

/// Query parameters of the dashboard request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub platform: String,
    /// UTC ISO 8601 timestamp or empty
    pub start_date: String,
    /// UTC ISO 8601 timestamp or empty
    pub end_date: String,
    pub source_id: String,
    pub limit: i64,
    /// Always a non-negative multiple of `limit`
    pub offset: i64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_limit(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    pub fn with_limit(limit: i64) -> Self {
        Self {
            platform: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            source_id: String::new(),
            limit: limit.max(1),
            offset: 0,
        }
    }

    /// Apply the form's values, converting dates to UTC timestamps.
    ///
    /// The offset is kept only when none of the filter fields changed, so a
    /// changed filter always starts from the first page.
    pub fn update_from_form<Tz: TimeZone>(&self, fields: &FormFields, tz: &Tz) -> Self {
        let mut next = Self {
            platform: fields.platform.trim().to_string(),
            start_date: start_of_day_iso(&fields.start_date),
            end_date: end_of_day_iso(&fields.end_date, tz),
            source_id: fields.source_id.trim().to_string(),
            limit: self.limit,
            offset: self.offset,
        };
        if !next.same_filters(self) {
            next.offset = 0;
        }
        next
    }

    /// Form submission: apply the form and return to the first page
    pub fn submitted<Tz: TimeZone>(&self, fields: &FormFields, tz: &Tz) -> Self {
        Self {
            offset: 0,
            ..self.update_from_form(fields, tz)
        }
    }

    pub fn next_page(&self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self.clone()
        }
    }

    /// Step back one page; a no-op on the first page
    pub fn previous_page(&self) -> Self {
        if self.offset < self.limit {
            return self.clone();
        }
        Self {
            offset: self.offset - self.limit,
            ..self.clone()
        }
    }

    /// Query parameters of the request for this state
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        DashboardQuery::from(self).query_pairs()
    }

    fn same_filters(&self, other: &Self) -> bool {
        self.platform == other.platform
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.source_id == other.source_id
    }
}

/// Midnight UTC of the given `YYYY-MM-DD` day, or empty if it doesn't parse.
///
/// Browsers read a bare date as UTC, so the start bound is not shifted into
/// local time.
pub fn start_of_day_iso(date: &str) -> String {
    parse_form_date(date)
        .map(|day| to_iso(Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))))
        .unwrap_or_default()
}

/// 23:59:59 local time of the given `YYYY-MM-DD` day, as a UTC timestamp
pub fn end_of_day_iso<Tz: TimeZone>(date: &str, tz: &Tz) -> String {
    let Some(day) = parse_form_date(date) else {
        return String::new();
    };
    let Some(end_of_day) = NaiveTime::from_hms_opt(23, 59, 59) else {
        return String::new();
    };
    let local = day.and_time(end_of_day);
    let utc = match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&local),
    };
    to_iso(utc)
}

fn parse_form_date(date: &str) -> Option<NaiveDate> {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT).ok()
}

/// Same shape as JavaScript's `Date.toISOString()`
fn to_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
