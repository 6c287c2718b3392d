//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use griot_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A fixed clock at the given UTC wall time.
    ///
    /// # Panics
    ///
    /// Panics if the components do not form a valid date-time.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
                .single()
                .expect("valid fixed clock time"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that returns the given instants one per call, then keeps
/// returning the last one. Used to tell apart which completion stamped a
/// record when several commands race.
#[derive(Debug)]
pub struct SequenceClock {
    instants: Mutex<Vec<DateTime<Utc>>>,
}

impl SequenceClock {
    /// Create a clock over `instants`, returned in order.
    ///
    /// # Panics
    ///
    /// Panics if `instants` is empty.
    #[must_use]
    pub fn new(instants: Vec<DateTime<Utc>>) -> Self {
        assert!(!instants.is_empty(), "SequenceClock needs at least one instant");
        let mut reversed = instants;
        reversed.reverse();
        Self {
            instants: Mutex::new(reversed),
        }
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> DateTime<Utc> {
        let mut remaining = self.instants.lock().unwrap();
        if remaining.len() > 1 {
            remaining.pop().unwrap()
        } else {
            remaining[0]
        }
    }
}
