//! Date arithmetic and es-CL date formatting.
//!
//! Dates are shown in the event's own timezone. Every formatter takes the
//! reference time explicitly so callers (and tests) control "now".

use chrono::{DateTime, Locale, Utc};
use chrono_tz::Tz;

/// The single locale the dashboard is written in.
pub const LOCALE: Locale = Locale::es_CL;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Whole days until `start`, rounded up. Zero or negative once started.
pub fn days_until(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff_ms = (start - now).num_milliseconds();
    (diff_ms as f64 / DAY_MS as f64).ceil() as i64
}

/// Relative-time badge, only shown for events one to seven days out.
pub fn relative_badge(days: i64) -> Option<String> {
    match days {
        1 => Some("Mañana".to_string()),
        2..=7 => Some(format!("En {} días", days)),
        _ => None,
    }
}

/// Human duration between two instants: "2 días", "1h 30m", "3h", "45m".
///
/// An end before the start is shown as "0m".
pub fn format_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let diff_ms = (end - start).num_milliseconds().max(0);
    let hours = diff_ms / HOUR_MS;
    let minutes = (diff_ms % HOUR_MS) / MINUTE_MS;

    if hours > 24 {
        format!("{} días", hours / 24)
    } else if hours > 0 && minutes > 0 {
        format!("{}h {}m", hours, minutes)
    } else if hours > 0 {
        format!("{}h", hours)
    } else {
        format!("{}m", minutes)
    }
}

/// Resolve an IANA timezone label, falling back to UTC.
pub fn resolve_timezone(label: &str) -> Tz {
    label.parse::<Tz>().unwrap_or_else(|_| {
        tracing::debug!(timezone = label, "Unknown timezone, showing UTC");
        Tz::UTC
    })
}

/// Short date, e.g. "mar, 21 oct"
pub fn format_short_date(date: DateTime<Utc>, timezone: &str) -> String {
    date.with_timezone(&resolve_timezone(timezone))
        .format_localized("%a, %-d %b", LOCALE)
        .to_string()
}

/// Full date, e.g. "martes, 21 de octubre de 2025"
pub fn format_full_date(date: DateTime<Utc>, timezone: &str) -> String {
    date.with_timezone(&resolve_timezone(timezone))
        .format_localized("%A, %-d de %B de %Y", LOCALE)
        .to_string()
}

/// 24-hour clock time, e.g. "18:30"
pub fn format_time(date: DateTime<Utc>, timezone: &str) -> String {
    date.with_timezone(&resolve_timezone(timezone))
        .format("%H:%M")
        .to_string()
}
