//! Time related utils.

use chrono::Utc;

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current UTC time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Whole milliseconds since the Unix epoch, floored.
pub fn timestamp_millis(t: DateTime) -> i64 {
    t.timestamp_millis()
}
