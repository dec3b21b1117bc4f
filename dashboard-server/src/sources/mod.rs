//! Collaborators that feed the dashboard.
//!
//! Live quotes come from two public HTTP feeds: a gold spot price in USD
//! per troy ounce, and current conditions from Open-Meteo. Both are behind
//! traits so the periodic drivers can run against mocks. The clock and
//! on-device readings are plain synchronous traits.

mod client;
mod clock;
mod device;
mod error;
mod mock;
mod types;

use async_trait::async_trait;

pub use client::{ClientConfig, GoldPriceClient, WeatherClient};
pub use clock::{Clock, FixedClock, SystemClock};
pub use device::{DeviceSource, StaticDevice};
pub use error::SourceError;
pub use mock::{MockGoldSource, MockWeatherSource};
pub use types::{CurrentWeather, GoldPriceItem, GoldPriceResponse, WeatherResponse};

/// A point on the map, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Dubai city centre.
    pub const DUBAI: Coordinates = Coordinates {
        latitude: 25.2048,
        longitude: 55.2708,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Live gold spot price, USD per troy ounce.
#[async_trait]
pub trait GoldPriceSource: Send + Sync {
    async fn fetch_spot_price(&self) -> Result<f64, SourceError>;
}

/// Current air temperature in °C at a location.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_current_temperature(&self, at: Coordinates) -> Result<f64, SourceError>;
}
