//! Next-departure resolution.
//!
//! Given a day's departures and the current wall-clock time, find the
//! departure the rider should aim for: the earliest one still to come
//! today, or the first one tomorrow once the service day has ended.

use chrono::NaiveTime;

use crate::domain::{DepartureEvent, seconds_of};

use super::config::UrgencyConfig;
use super::countdown::{COUNTDOWN_PLACEHOLDER, format_countdown};
use super::urgency::UrgencyTier;

/// The resolved next departure and its countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextDeparture {
    /// The departure to aim for.
    pub event: DepartureEvent,

    /// Seconds until it leaves, in `0..86400`.
    pub seconds_remaining: u32,

    /// Urgency band for `minutes_remaining()`.
    pub tier: UrgencyTier,

    /// Whether the countdown should draw attention.
    pub is_critical: bool,

    /// True when no departure remained today and this is tomorrow's first.
    pub wraps_to_next_day: bool,
}

impl NextDeparture {
    /// Whole minutes remaining, rounded down.
    pub fn minutes_remaining(&self) -> u32 {
        self.seconds_remaining / 60
    }

    /// Countdown text, `HH:MM:SS` or `MM:SS`.
    pub fn countdown(&self) -> String {
        format_countdown(self.seconds_remaining)
    }
}

/// Resolve the next departure at `now`.
///
/// Returns `None` only when `departures` is empty. The input does not need
/// to be sorted: the earliest departure strictly after `now` is chosen, and
/// if there is none the earliest departure of the day is used instead.
/// When two departures share a time, the first in sequence wins.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use dashboard_server::domain::{DepartureEvent, TimeOfDay};
/// use dashboard_server::scheduler::{UrgencyConfig, UrgencyTier, resolve_next};
///
/// let deps = vec![
///     DepartureEvent::new(TimeOfDay::parse_hhmm("07:00").unwrap(), "Bus 1"),
///     DepartureEvent::new(TimeOfDay::parse_hhmm("07:45").unwrap(), "Bus 2"),
/// ];
/// let now = NaiveTime::from_hms_opt(7, 10, 0).unwrap();
///
/// let next = resolve_next(&deps, now, &UrgencyConfig::default()).unwrap();
/// assert_eq!(next.event.vehicle_id, "Bus 2");
/// assert_eq!(next.seconds_remaining, 35 * 60);
/// assert_eq!(next.tier, UrgencyTier::Calm);
/// ```
pub fn resolve_next(
    departures: &[DepartureEvent],
    now: NaiveTime,
    config: &UrgencyConfig,
) -> Option<NextDeparture> {
    let (idx, wraps_to_next_day) = resolve_index(departures, now)?;
    let event = &departures[idx];

    let seconds_remaining = event.time_of_day.seconds_until_from(now);
    let minutes = seconds_remaining / 60;

    Some(NextDeparture {
        event: event.clone(),
        seconds_remaining,
        tier: UrgencyTier::classify(minutes, config),
        is_critical: config.is_critical(minutes),
        wraps_to_next_day,
    })
}

/// Index of the next departure, and whether it is tomorrow's.
fn resolve_index(departures: &[DepartureEvent], now: NaiveTime) -> Option<(usize, bool)> {
    let now_secs = seconds_of(now);

    let later_today = departures
        .iter()
        .enumerate()
        .filter(|(_, d)| d.time_of_day.seconds_from_midnight() > now_secs)
        .min_by_key(|(_, d)| d.time_of_day)
        .map(|(i, _)| i);

    match later_today {
        Some(i) => Some((i, false)),
        None => departures
            .iter()
            .enumerate()
            .min_by_key(|(_, d)| d.time_of_day)
            .map(|(i, _)| (i, true)),
    }
}

/// One line of a destination's departure list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub event: DepartureEvent,
    /// Whether this is the departure the countdown refers to.
    pub is_next: bool,
}

/// A destination's full departure list with the next one highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureBoard {
    pub destination: String,
    pub next: Option<NextDeparture>,
    /// All departures, in timetable order.
    pub rows: Vec<BoardRow>,
}

impl DepartureBoard {
    /// Countdown text, or the placeholder when nothing resolves.
    pub fn countdown(&self) -> String {
        self.next
            .as_ref()
            .map(NextDeparture::countdown)
            .unwrap_or_else(|| COUNTDOWN_PLACEHOLDER.to_string())
    }
}

/// Build the departure board for one destination at `now`.
///
/// Exactly one row is marked `is_next` unless the list is empty.
pub fn departure_board(
    destination: &str,
    departures: &[DepartureEvent],
    now: NaiveTime,
    config: &UrgencyConfig,
) -> DepartureBoard {
    let next_idx = resolve_index(departures, now).map(|(i, _)| i);

    let rows = departures
        .iter()
        .enumerate()
        .map(|(i, event)| BoardRow {
            event: event.clone(),
            is_next: Some(i) == next_idx,
        })
        .collect();

    DepartureBoard {
        destination: destination.to_string(),
        next: resolve_next(departures, now, config),
        rows,
    }
}
