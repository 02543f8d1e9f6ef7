//! Normalizes the two date encodings the ERP emits into `YYYY-MM-DD`.

use chrono::DateTime;
use regex::Regex;
use std::sync::LazyLock;

static EPOCH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/Date\((\d+)\)/").expect("epoch date pattern is a valid regex")
});

/// Accepts `/Date(<millis>)/` (UTC) or compact `YYYYMMDD`.
///
/// The compact form is only re-punctuated, never checked against the calendar,
/// so `20250230` becomes `2025-02-30`. Anything else yields `None`.
pub fn parse_date(raw: &str) -> Option<String> {
    if let Some(caps) = EPOCH_DATE.captures(raw) {
        let millis: i64 = caps[1].parse().ok()?;
        let instant = DateTime::from_timestamp_millis(millis)?;
        return Some(instant.format("%Y-%m-%d").to_string());
    }

    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return Some(format!("{}-{}-{}", &raw[0..4], &raw[4..6], &raw[6..8]));
    }

    None
}

/// [`parse_date`] over an optional upstream value; non-strings yield `None`.
pub fn normalize_date(value: Option<&serde_json::Value>) -> Option<String> {
    value.and_then(|v| v.as_str()).and_then(parse_date)
}
