//! Deterministic clock for tests
//!
//! # Examples
//!
//! ```rust,ignore
//! use chrono::{Duration, TimeZone, Utc};
//! use rewatch_common::testing::MockClock;
//! use rewatch_common::Clock;
//!
//! let clock = MockClock::new(Utc.with_ymd_and_hms(2025, 11, 3, 5, 0, 0).unwrap());
//! clock.advance(Duration::hours(24));
//! assert_eq!(clock.now_utc(), Utc.with_ymd_and_hms(2025, 11, 4, 5, 0, 0).unwrap());
//! ```

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::time::Clock;

/// Clock whose current instant is set by the test
#[derive(Debug)]
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    /// Jump to an absolute instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock() = instant;
    }

    /// Move time forward (or backward with a negative duration)
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for MockClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_set_and_advance() {
        let start = Utc.with_ymd_and_hms(2025, 3, 30, 0, 0, 0).unwrap();
        let clock = MockClock::new(start);
        assert_eq!(clock.now_utc(), start);

        clock.advance(Duration::minutes(90));
        assert_eq!(clock.now_utc(), start + Duration::minutes(90));

        let later = Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now_utc(), later);
    }
}
