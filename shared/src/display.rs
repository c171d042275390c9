use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Render an ISO date or timestamp for the tables, e.g. "1/31/2024, 12:00:00 AM".
/// Anything that doesn't parse is shown as-is.
pub fn format_display_date(iso: &str) -> String {
    let trimmed = iso.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.naive_utc().format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.format(DISPLAY_FORMAT).to_string();
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| iso.to_string()),
        Err(_) => iso.to_string(),
    }
}

/// Amounts print without a trailing ".0" for whole numbers
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}
