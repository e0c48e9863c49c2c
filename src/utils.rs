//! Date helpers and log-formatting utilities.
//!
//! - Parsing the service's `webPublicationDate` timestamps
//! - Formatting and interpreting date-only range bounds
//! - Truncating bodies and redacting credentials before they reach the logs

use crate::models::API_KEY_PARAM;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use url::Url;

/// Timestamp format used by `webPublicationDate`.
pub const PUBLICATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format for date-only range bounds.
pub const DATE_BOUND_FORMAT: &str = "%Y-%m-%d";

/// Parse a `webPublicationDate` value (`YYYY-MM-DDTHH:MM:SSZ`) as UTC.
pub fn parse_publication_date(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, PUBLICATION_DATE_FORMAT).map(|naive| naive.and_utc())
}

/// Render a date as a `YYYY-MM-DD` range bound.
pub fn format_date_bound(date: NaiveDate) -> String {
    date.format(DATE_BOUND_FORMAT).to_string()
}

/// Today's UTC date shifted by `days` (negative for the past).
pub fn utc_date_offset(days: i64) -> NaiveDate {
    (Utc::now() + Duration::days(days)).date_naive()
}

/// First instant of `date` in UTC. A date-only from-bound includes this instant.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Last whole second of `date` in UTC. A date-only to-bound includes this instant.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    date.and_time(last).and_utc()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes (backing off to a char boundary) with
/// `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Copy of `url` with the `api-key` value replaced, for logging.
pub fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == API_KEY_PARAM {
                (k.into_owned(), "<redacted>".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();
    if pairs.is_empty() {
        return redacted.to_string();
    }
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
