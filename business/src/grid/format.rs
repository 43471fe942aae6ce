//! Cell text formatting.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use log::warn;

pub const APPROVED: &str = "Approved";

/// `"true"` / `"false"`; absent is `"false"`.
pub fn bool_text(value: Option<bool>) -> String {
    value.unwrap_or(false).to_string()
}

pub fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Accepts a plain date, an RFC 3339 timestamp or a naive timestamp.
///
/// Timestamps keep the calendar date as written; no timezone conversion.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// `M/D/YYYY`, no zero padding.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// `"Approved on {date}"` for approved rows with a valid approval date,
/// otherwise the raw status.
pub fn status_text(status: Option<&str>, date_approved: Option<&str>) -> String {
    let status = status.unwrap_or_default();
    if status != APPROVED {
        return status.to_owned();
    }

    match date_approved {
        Some(raw) => match parse_date(raw) {
            Some(date) => format!("Approved on {}", short_date(date)),
            None => {
                warn!("Unparseable dateApproved {raw:?}, showing raw status");
                status.to_owned()
            }
        },
        None => status.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_bool_is_false() {
        assert_eq!(bool_text(None), "false");
        assert_eq!(bool_text(Some(false)), "false");
        assert_eq!(bool_text(Some(true)), "true");
    }

    #[test]
    fn approved_with_date() {
        assert_eq!(
            status_text(Some("Approved"), Some("2024-11-05")),
            "Approved on 11/5/2024"
        );
        assert_eq!(
            status_text(Some("Approved"), Some("2024-01-09T23:30:00Z")),
            "Approved on 1/9/2024"
        );
        assert_eq!(
            status_text(Some("Approved"), Some("2024-01-09T08:00:00.123")),
            "Approved on 1/9/2024"
        );
    }

    #[test]
    fn approved_without_valid_date_is_raw() {
        assert_eq!(status_text(Some("Approved"), None), "Approved");
        assert_eq!(status_text(Some("Approved"), Some("soon")), "Approved");
    }

    #[test]
    fn other_statuses_ignore_date() {
        assert_eq!(
            status_text(Some("Awaiting Moderation"), Some("2024-11-05")),
            "Awaiting Moderation"
        );
        assert_eq!(status_text(None, None), "");
    }
}
