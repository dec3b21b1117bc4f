//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::watch;

use crate::dashboard::{MarketSnapshot, ScheduleSnapshot};
use crate::scheduler::UrgencyConfig;
use crate::sources::Clock;
use crate::timetable::Timetable;

/// Shared application state.
///
/// Handlers only ever read from it: snapshots come from the drivers, and
/// departure boards are resolved on demand from the timetable and clock.
#[derive(Clone)]
pub struct AppState {
    /// Static timetable
    pub timetable: Arc<Timetable>,

    /// Clock used for on-demand departure boards
    pub clock: Arc<dyn Clock>,

    /// Urgency thresholds
    pub urgency: Arc<UrgencyConfig>,

    /// Latest weather and gold
    pub market: watch::Receiver<MarketSnapshot>,

    /// Latest per-destination countdowns
    pub schedule: watch::Receiver<ScheduleSnapshot>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        timetable: Arc<Timetable>,
        clock: Arc<dyn Clock>,
        urgency: UrgencyConfig,
        market: watch::Receiver<MarketSnapshot>,
        schedule: watch::Receiver<ScheduleSnapshot>,
    ) -> Self {
        Self {
            timetable,
            clock,
            urgency: Arc::new(urgency),
            market,
            schedule,
        }
    }
}
