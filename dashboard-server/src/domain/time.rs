//! Time-of-day handling for timetable data.
//!
//! Timetables list departures as "HH:MM" strings that repeat every day.
//! This module provides a second-less [`TimeOfDay`] and the wraparound
//! arithmetic used to count down to the next occurrence of one.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Number of seconds in one service day.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Spreadsheet time formats accepted by [`TimeOfDay::parse_lenient`].
const LENIENT_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M:%S %p"];

/// A wall-clock time within a 24-hour cycle, with minute precision.
///
/// Timetable entries carry no date: "07:15" means "07:15 every day".
///
/// # Examples
///
/// ```
/// use dashboard_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("07:15").unwrap();
/// assert_eq!(t.to_string(), "07:15");
/// assert_eq!(t.seconds_from_midnight(), 7 * 3600 + 15 * 60);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time of day, returning `None` when out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("7:15").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("12:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::new(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Parse a time as it appears in hand-maintained timetables.
    ///
    /// Surrounding whitespace is ignored and `;` is accepted in place of
    /// the colon (a common typo in spreadsheet exports, e.g. "13;30").
    /// Besides strict "HH:MM", spreadsheet cells also come as "05:15:00",
    /// "7:15" or "5:15 PM". Seconds are truncated.
    ///
    /// ```
    /// use dashboard_server::domain::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::parse_lenient(" 13;30 ").unwrap().to_string(), "13:30");
    /// assert_eq!(TimeOfDay::parse_lenient("05:15:00").unwrap().to_string(), "05:15");
    /// assert_eq!(TimeOfDay::parse_lenient("5:15 PM").unwrap().to_string(), "17:15");
    /// ```
    pub fn parse_lenient(s: &str) -> Result<Self, TimeError> {
        let normalized = s.trim().replace(';', ":");
        if let Ok(t) = Self::parse_hhmm(&normalized) {
            return Ok(t);
        }

        LENIENT_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
            .and_then(|t| Self::new(t.hour(), t.minute()))
            .ok_or_else(|| TimeError::new("unrecognised time format"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Seconds elapsed since midnight at this time.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.hour() * 3600 + self.minute() * 60
    }

    /// Converts to a `NaiveTime` with zero seconds.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// Seconds from `now` until the next occurrence of this time.
    ///
    /// Wraps across midnight, so the result is always in `0..SECONDS_PER_DAY`.
    /// Sub-second precision in `now` is ignored.
    ///
    /// ```
    /// use chrono::NaiveTime;
    /// use dashboard_server::domain::TimeOfDay;
    ///
    /// let bus = TimeOfDay::parse_hhmm("00:10").unwrap();
    /// let now = NaiveTime::from_hms_opt(23, 50, 0).unwrap();
    /// assert_eq!(bus.seconds_until_from(now), 20 * 60);
    /// ```
    pub fn seconds_until_from(&self, now: NaiveTime) -> u32 {
        let raw = i64::from(self.seconds_from_midnight()) - i64::from(seconds_of(now));
        raw.rem_euclid(i64::from(SECONDS_PER_DAY)) as u32
    }
}

/// Whole seconds since midnight for a wall-clock reading.
///
/// A leap second (`23:59:60`) is folded into `23:59:59`.
pub fn seconds_of(now: NaiveTime) -> u32 {
    now.num_seconds_from_midnight().min(SECONDS_PER_DAY - 1)
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        t.to_naive_time()
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let t = TimeOfDay::parse_hhmm("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = TimeOfDay::parse_hhmm("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = TimeOfDay::parse_hhmm("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(TimeOfDay::parse_hhmm("1430").is_err());
        assert!(TimeOfDay::parse_hhmm("14:3").is_err());
        assert!(TimeOfDay::parse_hhmm("14:30:00").is_err());

        // Missing colon
        assert!(TimeOfDay::parse_hhmm("14-30").is_err());
        assert!(TimeOfDay::parse_hhmm("14;30").is_err());

        // Non-digit characters
        assert!(TimeOfDay::parse_hhmm("ab:cd").is_err());
        assert!(TimeOfDay::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(TimeOfDay::parse_hhmm("24:00").is_err());
        assert!(TimeOfDay::parse_hhmm("12:60").is_err());
        assert!(TimeOfDay::new(24, 0).is_none());
        assert!(TimeOfDay::new(0, 60).is_none());
    }

    #[test]
    fn lenient_parse_normalizes_separator_and_whitespace() {
        assert_eq!(
            TimeOfDay::parse_lenient("13;30").unwrap(),
            TimeOfDay::parse_hhmm("13:30").unwrap()
        );
        assert_eq!(
            TimeOfDay::parse_lenient("  06:05\t").unwrap(),
            TimeOfDay::parse_hhmm("06:05").unwrap()
        );
        assert!(TimeOfDay::parse_lenient("").is_err());
        assert!(TimeOfDay::parse_lenient("soon").is_err());
    }

    #[test]
    fn lenient_parse_accepts_spreadsheet_formats() {
        let parsed = |s: &str| TimeOfDay::parse_lenient(s).unwrap().to_string();

        assert_eq!(parsed("05:15:00"), "05:15");
        assert_eq!(parsed("05:15:59"), "05:15");
        assert_eq!(parsed("7:15"), "07:15");
        assert_eq!(parsed("5:15 PM"), "17:15");
        assert_eq!(parsed("5:15 am"), "05:15");
        assert_eq!(parsed("12:05 AM"), "00:05");
        assert_eq!(parsed("12:30 PM"), "12:30");
        assert_eq!(parsed("6:45:30 PM"), "18:45");
        assert_eq!(parsed("13;30;00"), "13:30");
    }

    #[test]
    fn lenient_parse_still_rejects_nonsense() {
        assert!(TimeOfDay::parse_lenient("25:00").is_err());
        assert!(TimeOfDay::parse_lenient("13:30 PM").is_err());
        assert!(TimeOfDay::parse_lenient("12:60").is_err());
        assert_eq!(
            TimeOfDay::parse_lenient("noon").unwrap_err().to_string(),
            "invalid time: unrecognised time format"
        );
    }

    #[test]
    fn error_display() {
        let err = TimeOfDay::parse_hhmm("25:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");
    }

    #[test]
    fn display_and_debug() {
        let t = TimeOfDay::parse_hhmm("09:05").unwrap();
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(format!("{t:?}"), "TimeOfDay(09:05)");
    }

    #[test]
    fn ordering_follows_clock() {
        let a = TimeOfDay::parse_hhmm("06:30").unwrap();
        let b = TimeOfDay::parse_hhmm("06:45").unwrap();
        let c = TimeOfDay::parse_hhmm("23:00").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn seconds_until_same_day() {
        let bus = TimeOfDay::parse_hhmm("10:30").unwrap();
        assert_eq!(bus.seconds_until_from(hms(10, 0, 0)), 30 * 60);
        assert_eq!(bus.seconds_until_from(hms(10, 29, 59)), 1);
    }

    #[test]
    fn seconds_until_exact_match_is_zero() {
        let bus = TimeOfDay::parse_hhmm("10:30").unwrap();
        assert_eq!(bus.seconds_until_from(hms(10, 30, 0)), 0);
    }

    #[test]
    fn seconds_until_wraps_past_midnight() {
        let bus = TimeOfDay::parse_hhmm("06:00").unwrap();
        // One second after departure: almost a full day to wait.
        assert_eq!(bus.seconds_until_from(hms(6, 0, 1)), SECONDS_PER_DAY - 1);
        assert_eq!(bus.seconds_until_from(hms(23, 0, 0)), 7 * 3600);
    }

    #[test]
    fn seconds_until_ignores_subsecond_precision() {
        let bus = TimeOfDay::parse_hhmm("10:30").unwrap();
        let now = NaiveTime::from_hms_milli_opt(10, 29, 0, 900).unwrap();
        assert_eq!(bus.seconds_until_from(now), 60);
    }

    #[test]
    fn to_naive_time_roundtrip() {
        let t = TimeOfDay::parse_hhmm("17:45").unwrap();
        assert_eq!(t.to_naive_time(), hms(17, 45, 0));
        assert_eq!(NaiveTime::from(t), hms(17, 45, 0));
    }
}
