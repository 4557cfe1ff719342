//! Display formatting for timestamps, durations and run badges.
//!
//! Dates follow Portuguese (Portugal) conventions: `dd/mm/yyyy` and a 24-hour
//! clock. Missing or unparseable input renders as `-`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use shared::RunStatus;

pub const PLACEHOLDER: &str = "-";

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Accepts RFC 3339, offset-less date-times (read as wall time in `tz`) and
/// bare dates (read as UTC midnight).
fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(tz));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

fn format_in<Tz>(raw: Option<&str>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    raw.and_then(|raw| parse_timestamp(raw, tz))
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_date_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format_in(raw, tz, DATE_FORMAT)
}

pub fn format_time_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format_in(raw, tz, TIME_FORMAT)
}

pub fn format_date_time_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format_in(raw, tz, DATE_TIME_FORMAT)
}

pub fn format_date(raw: Option<&str>) -> String {
    format_date_in(raw, &Local)
}

pub fn format_time(raw: Option<&str>) -> String {
    format_time_in(raw, &Local)
}

pub fn format_date_time(raw: Option<&str>) -> String {
    format_date_time_in(raw, &Local)
}

/// `125.0` becomes `"2m 5s"` and `-125.0` becomes `"-2m 5s"`. Zero, NaN and
/// missing input give `-`.
pub fn format_duration(seconds: Option<f64>) -> String {
    let seconds = match seconds {
        Some(s) if s != 0.0 && !s.is_nan() => s,
        _ => return PLACEHOLDER.to_string(),
    };
    // round half toward +inf
    let total = (seconds + 0.5).floor() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let magnitude = total.unsigned_abs();
    format!("{}{}m {}s", sign, magnitude / 60, magnitude % 60)
}

/// Badge markup for a run status keyword. Unknown keywords get a neutral
/// badge showing the keyword itself.
pub fn status_badge(status: &str) -> String {
    match RunStatus::from_keyword(status) {
        Some(known) => format!(
            r#"<span class="badge {}">{} {}</span>"#,
            known.badge_class(),
            known.icon(),
            known.label()
        ),
        None => format!(r#"<span class="badge bg-secondary">{}</span>"#, status),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
