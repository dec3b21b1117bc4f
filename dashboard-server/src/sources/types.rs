//! Response shapes of the upstream APIs.
//!
//! Only the fields the dashboard reads are modelled.

use serde::Deserialize;

use super::error::SourceError;

/// Response of `dbXRates/USD` on the gold price feed.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldPriceResponse {
    #[serde(default)]
    pub items: Vec<GoldPriceItem>,
}

/// One currency row of the gold price feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPriceItem {
    /// Currency code, e.g. "USD".
    pub curr: String,
    /// Spot price of one troy ounce of gold.
    pub xau_price: f64,
}

impl GoldPriceResponse {
    /// The spot price from the first row.
    pub fn spot_price(&self) -> Result<f64, SourceError> {
        self.items
            .first()
            .map(|item| item.xau_price)
            .ok_or(SourceError::EmptyResponse)
    }
}

/// Response of Open-Meteo `v1/forecast` with `current_weather=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub current_weather: CurrentWeather,
}

/// Current conditions block.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    /// Air temperature in °C.
    pub temperature: f64,
    /// WMO weather interpretation code.
    #[serde(default)]
    pub weathercode: i32,
}
