//! Timestamp source for `insertedAt` / `updatedAt`.

use chrono::{SecondsFormat, Utc};

pub trait Clock {
    /// Current time as an ISO-8601 UTC string.
    fn now(&self) -> String;
}

/// Wall clock, millisecond precision, `Z` suffix
/// (e.g. `2024-05-01T12:30:00.123Z`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn system_clock_formats_millis_with_z_suffix() {
        let now = SystemClock.now();
        assert_eq!(now.len(), "2024-05-01T12:30:00.123Z".len());
        assert!(now.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&now).is_ok());
    }

    #[test]
    fn system_clock_strings_sort_chronologically() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
