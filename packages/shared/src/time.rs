//! Wall-clock formatting for chat messages.

use chrono::{DateTime, Local, TimeZone};

/// Format used for message times, e.g. `3:07 PM`.
pub const CLOCK_FORMAT: &str = "%-I:%M %p";

/// Format a point in time as an hour/minute clock string.
pub fn format_clock_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(CLOCK_FORMAT).to_string()
}

/// Current local time as an hour/minute clock string.
pub fn now_clock_time() -> String {
    format_clock_time(&Local::now())
}
