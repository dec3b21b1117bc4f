//! Static timetable reference data.
//!
//! The timetable is built once at startup, never mutated, and shared
//! read-only by every consumer. Lookups are by destination name.

mod error;
mod reference;
mod store;

pub use error::TimetableError;
pub use reference::dubai_shuttle;
pub use store::{Timetable, TimetableBuilder};
