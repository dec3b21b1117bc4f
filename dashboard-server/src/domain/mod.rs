//! Domain types for the dashboard.
//!
//! These are the validated value types shared by the timetable and the
//! departure scheduler. Invariants are enforced at construction time, so
//! code that receives these types can trust their validity.

mod departure;
mod time;

pub use departure::DepartureEvent;
pub use time::{SECONDS_PER_DAY, TimeError, TimeOfDay, seconds_of};
