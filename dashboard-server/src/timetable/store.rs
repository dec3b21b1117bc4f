//! In-memory timetable store.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{DepartureEvent, TimeOfDay};

use super::error::TimetableError;

/// Immutable mapping from destination name to its daily departures.
///
/// Departures for each destination are sorted ascending by time of day.
/// Destinations keep the order in which they were declared, which is the
/// order menus show them in.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    destinations: Vec<String>,
    departures: HashMap<String, Vec<DepartureEvent>>,
}

impl Timetable {
    /// Destination names in display order.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Departures for a destination, ascending by time of day.
    ///
    /// A known destination with no departures yields an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_server::timetable::{TimetableBuilder, TimetableError};
    ///
    /// let timetable = TimetableBuilder::new()
    ///     .departure("Mamzar", "07:15", "R15", "")
    ///     .build();
    ///
    /// assert_eq!(timetable.departures_for("Mamzar").unwrap().len(), 1);
    /// assert_eq!(
    ///     timetable.departures_for("Unknown"),
    ///     Err(TimetableError::UnknownDestination("Unknown".into()))
    /// );
    /// ```
    pub fn departures_for(&self, destination: &str) -> Result<&[DepartureEvent], TimetableError> {
        self.departures
            .get(destination)
            .map(Vec::as_slice)
            .ok_or_else(|| TimetableError::UnknownDestination(destination.to_string()))
    }

    /// Iterate destinations with their departures, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DepartureEvent])> {
        self.destinations.iter().map(|name| {
            let deps = self
                .departures
                .get(name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (name.as_str(), deps)
        })
    }

    /// Returns the number of destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true if there are no destinations.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// Builder for creating a timetable from literal data.
///
/// Provides a fluent API for declaring destinations and departures.
#[derive(Debug, Default)]
pub struct TimetableBuilder {
    inner: Timetable,
}

impl TimetableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a destination, even if it has no departures yet.
    pub fn destination(mut self, name: &str) -> Self {
        self.ensure(name);
        self
    }

    /// Add a departure from its timetable text.
    ///
    /// Entries whose time cannot be parsed are logged and dropped; the
    /// destination itself is still declared.
    pub fn departure(mut self, destination: &str, time: &str, vehicle_id: &str, note: &str) -> Self {
        let entries = self.ensure(destination);
        match TimeOfDay::parse_lenient(time) {
            Ok(time_of_day) => {
                entries.push(DepartureEvent::new(time_of_day, vehicle_id).with_note(note));
            }
            Err(e) => {
                warn!(destination, time, vehicle_id, error = %e, "dropping timetable entry");
            }
        }
        self
    }

    /// Add an already-validated departure.
    pub fn event(mut self, destination: &str, event: DepartureEvent) -> Self {
        self.ensure(destination).push(event);
        self
    }

    /// Build the timetable, sorting each destination's departures.
    pub fn build(mut self) -> Timetable {
        for deps in self.inner.departures.values_mut() {
            deps.sort_by_key(|d| d.time_of_day);
        }
        self.inner
    }

    fn ensure(&mut self, name: &str) -> &mut Vec<DepartureEvent> {
        if !self.inner.departures.contains_key(name) {
            self.inner.destinations.push(name.to_string());
        }
        self.inner.departures.entry(name.to_string()).or_default()
    }
}
