//! Data transfer objects for web responses.

use serde::Serialize;

use crate::dashboard::{DestinationStatus, MarketSnapshot, ScheduleSnapshot};
use crate::domain::DepartureEvent;
use crate::scheduler::{DepartureBoard, NextDeparture, UrgencyTier};

/// The combined dashboard view.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Wall clock, "HH:MM"
    pub clock: String,

    /// Date line, e.g. "Sat, Oct 17"
    pub date: String,

    /// Temperature, e.g. "31.4°C", or "--"
    pub weather: String,

    /// 22k gold per gram
    pub gold: GoldResult,

    /// Step counter, if available
    pub steps: Option<u64>,

    /// Battery charge in percent, if known
    pub battery_percent: Option<u8>,

    /// One entry per destination, in menu order
    pub destinations: Vec<DestinationResult>,
}

impl DashboardResponse {
    pub fn from_snapshots(schedule: &ScheduleSnapshot, market: &MarketSnapshot) -> Self {
        Self {
            clock: schedule.clock(),
            date: schedule.date(),
            weather: market.weather.clone(),
            gold: GoldResult {
                display: market.gold.display.clone(),
                per_gram: market.gold.per_gram,
                used_fallback: market.gold.used_fallback,
            },
            steps: schedule.steps,
            battery_percent: schedule.battery_percent,
            destinations: schedule
                .destinations
                .iter()
                .map(DestinationResult::from_status)
                .collect(),
        }
    }
}

/// Derived gold price.
#[derive(Debug, Serialize)]
pub struct GoldResult {
    /// e.g. "AED 335.53"
    pub display: String,

    /// Unrounded value behind `display`
    pub per_gram: f64,

    /// True when the live quote was unavailable
    pub used_fallback: bool,
}

/// A destination tile.
#[derive(Debug, Serialize)]
pub struct DestinationResult {
    pub destination: String,

    /// "MM:SS", "HH:MM:SS" or "--:--:--"
    pub countdown: String,

    pub next: Option<NextDepartureResult>,
}

impl DestinationResult {
    pub fn from_status(status: &DestinationStatus) -> Self {
        Self {
            destination: status.destination.clone(),
            countdown: status.countdown.clone(),
            next: status.next.as_ref().map(NextDepartureResult::from_next),
        }
    }
}

/// The resolved next departure.
#[derive(Debug, Serialize)]
pub struct NextDepartureResult {
    /// Departure time, "HH:MM"
    pub time: String,

    pub vehicle_id: String,

    pub note: Option<String>,

    pub seconds_remaining: u32,

    pub minutes_remaining: u32,

    pub countdown: String,

    pub tier: UrgencyTier,

    /// The face should draw attention to the countdown
    pub is_critical: bool,

    /// This is tomorrow's first departure
    pub tomorrow: bool,
}

impl NextDepartureResult {
    pub fn from_next(next: &NextDeparture) -> Self {
        Self {
            time: next.event.time_of_day.to_string(),
            vehicle_id: next.event.vehicle_id.clone(),
            note: next.event.note.clone(),
            seconds_remaining: next.seconds_remaining,
            minutes_remaining: next.minutes_remaining(),
            countdown: next.countdown(),
            tier: next.tier,
            is_critical: next.is_critical,
            tomorrow: next.wraps_to_next_day,
        }
    }
}

/// Destination names for the menu.
#[derive(Debug, Serialize)]
pub struct DestinationListResponse {
    pub destinations: Vec<String>,
}

/// A destination's departure list.
#[derive(Debug, Serialize)]
pub struct DepartureBoardResponse {
    pub destination: String,
    pub countdown: String,
    pub next: Option<NextDepartureResult>,
    pub departures: Vec<DepartureRow>,
}

impl DepartureBoardResponse {
    pub fn from_board(board: &DepartureBoard) -> Self {
        Self {
            destination: board.destination.clone(),
            countdown: board.countdown(),
            next: board.next.as_ref().map(NextDepartureResult::from_next),
            departures: board
                .rows
                .iter()
                .map(|row| DepartureRow::from_event(&row.event, row.is_next))
                .collect(),
        }
    }
}

/// One line of a departure list.
#[derive(Debug, Serialize)]
pub struct DepartureRow {
    pub time: String,
    pub vehicle_id: String,
    pub note: Option<String>,
    pub is_next: bool,
}

impl DepartureRow {
    fn from_event(event: &DepartureEvent, is_next: bool) -> Self {
        Self {
            time: event.time_of_day.to_string(),
            vehicle_id: event.vehicle_id.clone(),
            note: event.note.clone(),
            is_next,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeOfDay;
    use crate::scheduler::{UrgencyConfig, departure_board};
    use chrono::NaiveTime;

    fn dep(time: &str, vehicle: &str) -> DepartureEvent {
        DepartureEvent::new(TimeOfDay::parse_hhmm(time).unwrap(), vehicle)
    }

    #[test]
    fn board_response_serializes() {
        let deps = vec![dep("07:00", "Bus 1"), dep("07:45", "Bus 2").with_note("Express")];
        let now = NaiveTime::from_hms_opt(7, 40, 30).unwrap();
        let board = departure_board("GGI", &deps, now, &UrgencyConfig::default());

        let json = serde_json::to_value(DepartureBoardResponse::from_board(&board)).unwrap();

        assert_eq!(json["destination"], "GGI");
        assert_eq!(json["countdown"], "04:30");
        assert_eq!(json["next"]["time"], "07:45");
        assert_eq!(json["next"]["tier"], "critical");
        assert_eq!(json["next"]["minutes_remaining"], 4);
        assert_eq!(json["next"]["tomorrow"], false);
        assert_eq!(json["departures"][0]["is_next"], false);
        assert_eq!(json["departures"][1]["is_next"], true);
        assert_eq!(json["departures"][1]["note"], "Express");
        assert!(json["departures"][0]["note"].is_null());
    }

    #[test]
    fn empty_board_has_placeholder_and_null_next() {
        let now = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        let board = departure_board("Depot", &[], now, &UrgencyConfig::default());
        let json = serde_json::to_value(DepartureBoardResponse::from_board(&board)).unwrap();

        assert_eq!(json["countdown"], "--:--:--");
        assert!(json["next"].is_null());
        assert_eq!(json["departures"].as_array().unwrap().len(), 0);
    }
}
