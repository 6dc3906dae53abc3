//! Formatting helpers for values shown to the user.

use chrono::NaiveDate;
use serde::Serialize;

/// Display format of the date picker trigger, e.g. `Oct 18, 2026`.
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Wire and `<input type="date">` format.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse the value produced by a native date input.
///
/// Browsers report an empty string when the field is cleared.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

/// Two-space indented JSON, as shown in the success notification.
pub fn pretty_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value)
}
