//! Scheduled departure events.

use std::fmt;

use super::TimeOfDay;

/// One scheduled departure from a timetable.
///
/// A departure has no identity beyond its fields: two events with the same
/// time, vehicle and note are the same event.
///
/// # Examples
///
/// ```
/// use dashboard_server::domain::{DepartureEvent, TimeOfDay};
///
/// let dep = DepartureEvent::new(TimeOfDay::parse_hhmm("07:15").unwrap(), "R15")
///     .with_note("Express");
/// assert_eq!(dep.to_string(), "07:15 R15 (Express)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepartureEvent {
    /// When the vehicle leaves, every day.
    pub time_of_day: TimeOfDay,
    /// Route or vehicle identifier shown to the rider.
    pub vehicle_id: String,
    /// Optional free-text remark ("Last bus", "Via Mamzar").
    pub note: Option<String>,
}

impl DepartureEvent {
    /// Create a departure without a note.
    pub fn new(time_of_day: TimeOfDay, vehicle_id: impl Into<String>) -> Self {
        Self {
            time_of_day,
            vehicle_id: vehicle_id.into(),
            note: None,
        }
    }

    /// Attach a note. Empty notes are stored as `None`.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() {
            None
        } else {
            Some(note)
        };
        self
    }
}

impl fmt::Display for DepartureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time_of_day, self.vehicle_id)?;
        if let Some(note) = &self.note {
            write!(f, " ({note})")?;
        }
        Ok(())
    }
}
