//! Immutable dashboard snapshots.
//!
//! The drivers publish these; the presentation layer reads them and
//! decides how to redraw. Nothing in here is ever mutated after
//! construction.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::pricing::{
    DerivedPrice, Jitter, PricingConfig, Quote, derive_gold_display_price, derive_weather_display,
};
use crate::scheduler::{COUNTDOWN_PLACEHOLDER, NextDeparture, UrgencyConfig, resolve_next};
use crate::sources::DeviceSource;
use crate::timetable::Timetable;

/// Next-departure status for one destination tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationStatus {
    pub destination: String,
    pub next: Option<NextDeparture>,
    /// Countdown text, or the placeholder when nothing resolves.
    pub countdown: String,
}

/// Everything that changes on the per-second tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    pub now: NaiveTime,
    pub today: NaiveDate,
    pub steps: Option<u64>,
    pub battery_percent: Option<u8>,
    pub destinations: Vec<DestinationStatus>,
}

impl ScheduleSnapshot {
    /// Wall-clock display, "HH:MM".
    pub fn clock(&self) -> String {
        self.now.format("%H:%M").to_string()
    }

    /// Date line, e.g. "Sat, Oct 17".
    pub fn date(&self) -> String {
        self.today.format("%a, %b %-d").to_string()
    }
}

/// Everything that changes on the market refresh tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub weather: String,
    pub gold: DerivedPrice,
}

/// Resolve every destination in the timetable at `now`.
pub fn schedule_snapshot(
    timetable: &Timetable,
    local: NaiveDateTime,
    urgency: &UrgencyConfig,
    device: &dyn DeviceSource,
) -> ScheduleSnapshot {
    let now = local.time();
    let destinations = timetable
        .iter()
        .map(|(name, departures)| {
            let next = resolve_next(departures, now, urgency);
            let countdown = next
                .as_ref()
                .map(NextDeparture::countdown)
                .unwrap_or_else(|| COUNTDOWN_PLACEHOLDER.to_string());
            DestinationStatus {
                destination: name.to_string(),
                next,
                countdown,
            }
        })
        .collect();

    ScheduleSnapshot {
        now,
        today: local.date(),
        steps: device.steps(),
        battery_percent: device.battery_percent(),
        destinations,
    }
}

/// Derive display values from one cycle's quotes.
pub fn market_snapshot(
    weather: &Quote,
    gold: &Quote,
    pricing: &PricingConfig,
    jitter: &dyn Jitter,
) -> MarketSnapshot {
    MarketSnapshot {
        weather: derive_weather_display(weather),
        gold: derive_gold_display_price(gold, pricing, jitter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::FixedJitter;
    use crate::scheduler::UrgencyTier;
    use crate::sources::StaticDevice;
    use crate::timetable::{TimetableBuilder, dubai_shuttle};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn resolves_every_destination_in_order() {
        let tt = dubai_shuttle();
        let device = StaticDevice::new(Some(5230), Some(76));
        let snap = schedule_snapshot(&tt, at(7, 10, 0), &UrgencyConfig::default(), &device);

        let names: Vec<_> = snap
            .destinations
            .iter()
            .map(|d| d.destination.as_str())
            .collect();
        assert_eq!(names, vec!["GGI", "Al Nahda", "Mamzar"]);

        let ggi = &snap.destinations[0];
        let next = ggi.next.as_ref().unwrap();
        assert_eq!(next.event.time_of_day.to_string(), "07:15");
        assert_eq!(ggi.countdown, "05:00");
        assert_eq!(next.tier, UrgencyTier::Urgent);

        assert_eq!(snap.steps, Some(5230));
        assert_eq!(snap.battery_percent, Some(76));
        assert_eq!(snap.clock(), "07:10");
        assert_eq!(snap.date(), "Sat, Oct 17");
    }

    #[test]
    fn date_line_has_no_padding() {
        let snap = ScheduleSnapshot {
            now: NaiveTime::MIN,
            today: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            steps: None,
            battery_percent: None,
            destinations: Vec::new(),
        };
        assert_eq!(snap.date(), "Mon, Mar 2");
    }

    #[test]
    fn empty_destination_shows_placeholder() {
        let tt = TimetableBuilder::new().destination("Depot").build();
        let snap = schedule_snapshot(
            &tt,
            at(12, 0, 0),
            &UrgencyConfig::default(),
            &StaticDevice::default(),
        );

        assert!(snap.destinations[0].next.is_none());
        assert_eq!(snap.destinations[0].countdown, "--:--:--");
    }

    #[test]
    fn market_snapshot_from_live_quotes() {
        let snap = market_snapshot(
            &Quote::available(31.4),
            &Quote::available(3100.0),
            &PricingConfig::default(),
            &FixedJitter(0.0),
        );
        assert_eq!(snap.weather, "31.4°C");
        assert_eq!(snap.gold.display, "AED 335.53");
        assert!(!snap.gold.used_fallback);
    }

    #[test]
    fn market_snapshot_degrades_on_failure() {
        let snap = market_snapshot(
            &Quote::unavailable(),
            &Quote::unavailable(),
            &PricingConfig::default(),
            &FixedJitter(0.0),
        );
        assert_eq!(snap.weather, "--");
        assert_eq!(snap.gold.display, "AED 468.65");
        assert!(snap.gold.used_fallback);
    }
}
