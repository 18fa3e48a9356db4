//! Clock - Source of "now" for placement timestamps
//!
//! TigerStyle: Time is injected. The session never calls the system clock
//! directly, so tests can pin it.

use chrono::{Days, NaiveDateTime};

/// Anything that can say what time it is.
pub trait Clock {
    /// Current local date-time.
    fn now(&self) -> NaiveDateTime;
}

// =============================================================================
// SystemClock
// =============================================================================

/// Wall-clock local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

// =============================================================================
// SimClock
// =============================================================================

/// A simulated clock for deterministic testing.
///
/// TigerStyle:
/// - Time only moves forward
/// - All time operations are explicit
/// - No reliance on system time
#[derive(Debug, Clone)]
pub struct SimClock {
    current: NaiveDateTime,
}

impl SimClock {
    /// Create a clock starting at the given instant.
    #[must_use]
    pub fn at(start: NaiveDateTime) -> Self {
        Self { current: start }
    }

    /// Advance time by the given seconds.
    ///
    /// # Returns
    /// The new current time.
    pub fn advance_secs(&mut self, secs: u32) -> NaiveDateTime {
        let old = self.current;
        self.current += chrono::Duration::seconds(i64::from(secs));

        // Postcondition
        assert!(self.current >= old, "time must not go backwards");

        self.current
    }

    /// Advance time by whole days.
    ///
    /// # Panics
    /// Panics if the result is past the end of the calendar.
    pub fn advance_days(&mut self, days: u64) -> NaiveDateTime {
        self.current = self
            .current
            .checked_add_days(Days::new(days))
            .unwrap_or_else(|| panic!("advance_days({days}) overflows the calendar"));
        self.current
    }
}

impl Clock for SimClock {
    fn now(&self) -> NaiveDateTime {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 28)
            .unwrap()
            .and_hms_opt(23, 59, 30)
            .unwrap()
    }

    #[test]
    fn test_sim_clock_at() {
        let clock = SimClock::at(start());
        assert_eq!(clock.now(), start());
    }

    #[test]
    fn test_advance_secs() {
        let mut clock = SimClock::at(start());

        let now = clock.advance_secs(45);

        assert_eq!(now.to_string(), "2024-02-29 00:00:15");
        assert_eq!(clock.now(), now);
    }

    #[test]
    fn test_advance_days() {
        let mut clock = SimClock::at(start());

        clock.advance_days(2);

        assert_eq!(clock.now().to_string(), "2024-03-01 23:59:30");
    }
}
