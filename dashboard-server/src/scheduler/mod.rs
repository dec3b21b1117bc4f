//! Departure scheduling.
//!
//! Pure functions of (departures, now): which departure is next, how long
//! until it leaves, and how urgent that is. Nothing here holds state
//! between calls, so the same inputs always produce the same result.

mod config;
mod countdown;
mod resolve;
mod urgency;

pub use config::UrgencyConfig;
pub use countdown::{COUNTDOWN_PLACEHOLDER, format_countdown};
pub use resolve::{BoardRow, DepartureBoard, NextDeparture, departure_board, resolve_next};
pub use urgency::UrgencyTier;
