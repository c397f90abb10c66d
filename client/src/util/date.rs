//! Wall-clock source and registration-date formatting.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Offset applied to registration timestamps (UTC+09:00).
pub const REG_DATE_UTC_OFFSET_SECS: i32 = 9 * 3600;

const REG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System clock. On WASM this reads `Date.now()` through chrono's `wasmbind`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Format `at` as `YYYY-MM-DD HH:MM:SS` in the registration time zone.
pub fn format_reg_date(at: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(REG_DATE_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    at.with_timezone(&offset).format(REG_DATE_FORMAT).to_string()
}
