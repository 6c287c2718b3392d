//! Clock abstraction for deterministic timestamps and date cutoffs.

use chrono::{DateTime, NaiveDate, Utc};

/// Layout of timestamps exchanged with the API (`LocalDateTime` without
/// offset, e.g. `2026-01-15T10:00:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Abstraction over system time.
///
/// Transitions stamp `processed_at` and period filters compute their
/// cutoff from this trait so tests can pin "now".
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the current time formatted with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Pinned(DateTime<Utc>);

    impl Clock for Pinned {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_timestamp_uses_api_layout() {
        let clock = Pinned(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());

        assert_eq!(clock.timestamp(), "2026-01-15T10:00:00");
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    }
}
