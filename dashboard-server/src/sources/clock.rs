//! Wall-clock collaborators.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Supplies the current local date and time.
pub trait Clock: Send + Sync {
    /// Local date and time now.
    fn local(&self) -> NaiveDateTime;

    /// Local time of day now.
    fn now(&self) -> NaiveTime {
        self.local().time()
    }

    /// Local calendar date now.
    fn today(&self) -> NaiveDate {
        self.local().date()
    }
}

/// The system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Stop the clock at `h:m:s` on 1970-01-01. Out-of-range values stop it
    /// at midnight.
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap_or(NaiveTime::MIN);
        Self(NaiveDate::default().and_time(time))
    }

    /// Move the stopped clock to another date, keeping the time of day.
    pub fn on(self, date: NaiveDate) -> Self {
        Self(date.and_time(self.0.time()))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_does_not_move() {
        let clock = FixedClock::at(20, 48, 0);
        assert_eq!(clock.now(), NaiveTime::from_hms_opt(20, 48, 0).unwrap());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn fixed_clock_rejects_invalid_time() {
        assert_eq!(FixedClock::at(25, 0, 0).now(), NaiveTime::MIN);
    }

    #[test]
    fn fixed_clock_on_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let clock = FixedClock::at(7, 10, 0).on(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now(), NaiveTime::from_hms_opt(7, 10, 0).unwrap());
    }
}
