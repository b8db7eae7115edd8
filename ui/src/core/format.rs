//! Formatting helpers for presenting history entries.

use time::{macros::format_description, OffsetDateTime};

/// Wall-clock label such as `3:04:05 PM`.
pub fn format_clock(ts: OffsetDateTime) -> String {
    ts.format(&format_description!(
        "[hour repr:12 padding:none]:[minute]:[second] [period]"
    ))
    .unwrap_or_else(|_| "-".to_string())
}

/// Local time when the offset can be determined, UTC otherwise.
pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn format_length(length: usize) -> String {
    if length == 1 {
        "1 char".to_string()
    } else {
        format!("{length} chars")
    }
}
