//! Bundled reference timetable.
//!
//! The staff shuttle loops Al Nahda → Mamzar → GGI and back. Each
//! destination lists the departures that head towards it from the rider's
//! usual boarding stop.

use super::store::{Timetable, TimetableBuilder};

/// The staff shuttle timetable.
pub fn dubai_shuttle() -> Timetable {
    TimetableBuilder::new()
        // Morning run towards the office
        .departure("GGI", "06:30", "Bus 1", "First bus")
        .departure("GGI", "07:00", "Bus 2", "")
        .departure("GGI", "07:15", "Bus 1", "Via Mamzar")
        .departure("GGI", "07:45", "Bus 3", "")
        .departure("GGI", "08:15", "Bus 2", "Express")
        .departure("GGI", "09:00", "Bus 1", "")
        .departure("GGI", "13:30", "Bus 3", "Midday shift")
        // Evening run home
        .departure("Al Nahda", "17:00", "Bus 1", "")
        .departure("Al Nahda", "17:30", "Bus 2", "Via Mamzar")
        .departure("Al Nahda", "18:00", "Bus 3", "")
        .departure("Al Nahda", "18:45", "Bus 1", "")
        .departure("Al Nahda", "20:48", "Bus 2", "")
        .departure("Al Nahda", "22:30", "Bus 3", "Last bus")
        .departure("Mamzar", "07:05", "Bus 1", "")
        .departure("Mamzar", "07:25", "Bus 2", "")
        .departure("Mamzar", "17:10", "Bus 1", "")
        .departure("Mamzar", "17:40", "Bus 2", "")
        .departure("Mamzar", "20:55", "Bus 2", "Return leg")
        .build()
}
