//! Periodic drivers.
//!
//! Two recurring tasks keep the dashboard current: a fast tick that
//! re-resolves departures against the clock, and a slow tick that refetches
//! live quotes. Each publishes immutable snapshots on a `watch` channel and
//! stops when its cancellation token fires.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::pricing::{Jitter, PricingConfig, Quote, RandomJitter};
use crate::scheduler::UrgencyConfig;
use crate::sources::{Clock, Coordinates, DeviceSource, GoldPriceSource, WeatherSource};
use crate::timetable::Timetable;

use super::snapshot::{MarketSnapshot, ScheduleSnapshot, market_snapshot, schedule_snapshot};

/// Tick rates and the weather query location.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// How often departures are re-resolved.
    pub schedule_tick: Duration,

    /// How often weather and gold are refetched.
    pub market_refresh: Duration,

    /// Where the weather is reported for.
    pub location: Coordinates,
}

impl DriverConfig {
    /// Set the schedule tick.
    pub fn with_schedule_tick(mut self, tick: Duration) -> Self {
        self.schedule_tick = tick;
        self
    }

    /// Set the market refresh interval.
    pub fn with_market_refresh(mut self, refresh: Duration) -> Self {
        self.market_refresh = refresh;
        self
    }

    /// Set the weather location.
    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.location = location;
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            schedule_tick: Duration::from_secs(1),
            market_refresh: Duration::from_secs(60),
            location: Coordinates::DUBAI,
        }
    }
}

/// The dashboard's inputs and policies.
///
/// Holds no display state: every snapshot is computed fresh from the
/// timetable, the clock and the latest quotes.
pub struct Dashboard {
    timetable: Arc<Timetable>,
    clock: Arc<dyn Clock>,
    device: Arc<dyn DeviceSource>,
    gold: Arc<dyn GoldPriceSource>,
    weather: Arc<dyn WeatherSource>,
    jitter: Arc<dyn Jitter>,
    urgency: UrgencyConfig,
    pricing: PricingConfig,
    config: DriverConfig,
}

impl Dashboard {
    /// Create a dashboard with default policies.
    pub fn new(
        timetable: Arc<Timetable>,
        clock: Arc<dyn Clock>,
        device: Arc<dyn DeviceSource>,
        gold: Arc<dyn GoldPriceSource>,
        weather: Arc<dyn WeatherSource>,
    ) -> Self {
        Self {
            timetable,
            clock,
            device,
            gold,
            weather,
            jitter: Arc::new(RandomJitter),
            urgency: UrgencyConfig::default(),
            pricing: PricingConfig::default(),
            config: DriverConfig::default(),
        }
    }

    /// Set the urgency thresholds.
    pub fn with_urgency(mut self, urgency: UrgencyConfig) -> Self {
        self.urgency = urgency;
        self
    }

    /// Set the pricing policy.
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    /// Set the fallback jitter source.
    pub fn with_jitter(mut self, jitter: Arc<dyn Jitter>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set tick rates and location.
    pub fn with_driver_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve all destinations against the clock now.
    pub fn current_schedule(&self) -> ScheduleSnapshot {
        schedule_snapshot(
            &self.timetable,
            self.clock.local(),
            &self.urgency,
            self.device.as_ref(),
        )
    }

    /// Fetch both quotes concurrently and derive display values.
    ///
    /// Never fails; upstream errors are logged and degrade the display.
    pub async fn refresh_market(&self) -> MarketSnapshot {
        let (weather, gold) = futures::join!(
            self.weather
                .fetch_current_temperature(self.config.location),
            self.gold.fetch_spot_price(),
        );

        let weather = Quote::from_fetch("weather", weather);
        let gold = Quote::from_fetch("gold", gold);

        market_snapshot(&weather, &gold, &self.pricing, self.jitter.as_ref())
    }

    /// Start both drivers. They run until `cancel` fires.
    ///
    /// The first market fetch happens immediately; until it completes the
    /// market channel holds the degraded display.
    pub fn spawn(self, cancel: CancellationToken) -> DashboardHandle {
        let initial_market = market_snapshot(
            &Quote::unavailable(),
            &Quote::unavailable(),
            &self.pricing,
            self.jitter.as_ref(),
        );
        let (market_tx, market_rx) = watch::channel(initial_market);
        let (schedule_tx, schedule_rx) = watch::channel(self.current_schedule());

        let dashboard = Arc::new(self);

        let schedule_task = tokio::spawn(run_schedule(
            dashboard.clone(),
            schedule_tx,
            cancel.clone(),
        ));
        let market_task = tokio::spawn(run_market(dashboard, market_tx, cancel.clone()));

        DashboardHandle {
            market: market_rx,
            schedule: schedule_rx,
            cancel,
            tasks: vec![schedule_task, market_task],
        }
    }
}

async fn run_schedule(
    dashboard: Arc<Dashboard>,
    tx: watch::Sender<ScheduleSnapshot>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(dashboard.config.schedule_tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                tx.send_replace(dashboard.current_schedule());
            }
        }
    }

    debug!("schedule driver stopped");
}

async fn run_market(
    dashboard: Arc<Dashboard>,
    tx: watch::Sender<MarketSnapshot>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(dashboard.config.market_refresh);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {}
        }

        // An in-flight fetch is abandoned on shutdown.
        let snapshot = tokio::select! {
            _ = cancel.cancelled() => break,
            snapshot = dashboard.refresh_market() => snapshot,
        };

        debug!(
            weather = %snapshot.weather,
            gold = %snapshot.gold.display,
            fallback = snapshot.gold.used_fallback,
            "market refreshed"
        );
        tx.send_replace(snapshot);
    }

    debug!("market driver stopped");
}

/// Running drivers and their output channels.
pub struct DashboardHandle {
    market: watch::Receiver<MarketSnapshot>,
    schedule: watch::Receiver<ScheduleSnapshot>,
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl DashboardHandle {
    /// Subscribe to market snapshots.
    pub fn market(&self) -> watch::Receiver<MarketSnapshot> {
        self.market.clone()
    }

    /// Subscribe to schedule snapshots.
    pub fn schedule(&self) -> watch::Receiver<ScheduleSnapshot> {
        self.schedule.clone()
    }

    /// Stop both drivers and wait for them to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        for task in self.tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "dashboard driver ended abnormally");
            }
        }
        info!("dashboard drivers stopped");
    }
}
