//! Live dashboard state.
//!
//! Combines the timetable, the scheduler and the price pipeline with the
//! live sources, and keeps immutable snapshots of the result current on a
//! fixed cadence.

mod driver;
mod snapshot;

pub use driver::{Dashboard, DashboardHandle, DriverConfig};
pub use snapshot::{
    DestinationStatus, MarketSnapshot, ScheduleSnapshot, market_snapshot, schedule_snapshot,
};
