//! Timestamp strings expected by the API.
//!
//! The service wants China Standard Time. The client formats the local wall
//! clock and appends a literal `+08:00`; the host's real offset is ignored.

use chrono::{Local, NaiveDateTime};

/// Offset appended to every timestamp.
pub const OFFSET_SUFFIX: &str = "+08:00";

const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
const SIGNING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// `YYYY-MM-DDTHH:MM:SS.mmm+08:00`, used in request bodies.
pub fn format_event_time(at: &NaiveDateTime) -> String {
    format!("{}{OFFSET_SUFFIX}", at.format(EVENT_TIME_FORMAT))
}

/// `YYYY-MM-DD HH:MM:SS.mmm +08:00`, used in the `current_datetime` header.
pub fn format_signing_time(at: &NaiveDateTime) -> String {
    format!("{} {OFFSET_SUFFIX}", at.format(SIGNING_TIME_FORMAT))
}

pub fn event_time_now() -> String {
    format_event_time(&Local::now().naive_local())
}

pub fn signing_time_now() -> String {
    format_signing_time(&Local::now().naive_local())
}
