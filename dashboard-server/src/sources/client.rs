//! HTTP clients for the gold price and weather feeds.
//!
//! Both feeds are public and unauthenticated. Each client owns a
//! `reqwest::Client` with a request timeout; everything else is plain
//! status checking and JSON decoding.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::SourceError;
use super::types::{GoldPriceResponse, WeatherResponse};
use super::{Coordinates, GoldPriceSource, WeatherSource};

/// Default base URL for the gold price feed.
const DEFAULT_GOLD_BASE_URL: &str = "https://data-asg.goldprice.org";

/// Default base URL for the Open-Meteo forecast API.
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for an upstream HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Config for the production gold price feed.
    pub fn gold() -> Self {
        Self {
            base_url: DEFAULT_GOLD_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Config for the production Open-Meteo API.
    pub fn weather() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    fn build_http(&self) -> Result<reqwest::Client, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(http)
    }
}

/// Send a GET and decode a JSON body, mapping failures to `SourceError`.
async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, SourceError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| SourceError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}

/// Client for the gold spot price feed (USD per troy ounce).
#[derive(Debug, Clone)]
pub struct GoldPriceClient {
    http: reqwest::Client,
    base_url: String,
}

impl GoldPriceClient {
    /// Create a new gold price client.
    pub fn new(config: ClientConfig) -> Result<Self, SourceError> {
        Ok(Self {
            http: config.build_http()?,
            base_url: config.base_url,
        })
    }

    fn url(&self) -> String {
        format!("{}/dbXRates/USD", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GoldPriceSource for GoldPriceClient {
    async fn fetch_spot_price(&self) -> Result<f64, SourceError> {
        let response: GoldPriceResponse = get_json(self.http.get(self.url())).await?;
        response.spot_price()
    }
}

/// Client for current conditions from Open-Meteo.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client.
    pub fn new(config: ClientConfig) -> Result<Self, SourceError> {
        Ok(Self {
            http: config.build_http()?,
            base_url: config.base_url,
        })
    }

    fn url(&self) -> String {
        format!("{}/v1/forecast", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn fetch_current_temperature(&self, at: Coordinates) -> Result<f64, SourceError> {
        let request = self.http.get(self.url()).query(&[
            ("latitude", at.latitude.to_string()),
            ("longitude", at.longitude.to_string()),
            ("current_weather", "true".to_string()),
        ]);

        let response: WeatherResponse = get_json(request).await?;
        Ok(response.current_weather.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ClientConfig::gold();
        assert_eq!(config.base_url, DEFAULT_GOLD_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let config = ClientConfig::weather();
        assert_eq!(config.base_url, DEFAULT_WEATHER_BASE_URL);
    }

    #[test]
    fn config_builder() {
        let config = ClientConfig::gold()
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn gold_url() {
        let client = GoldPriceClient::new(ClientConfig::gold()).unwrap();
        assert_eq!(client.url(), "https://data-asg.goldprice.org/dbXRates/USD");

        let client =
            GoldPriceClient::new(ClientConfig::gold().with_base_url("http://localhost:9000/"))
                .unwrap();
        assert_eq!(client.url(), "http://localhost:9000/dbXRates/USD");
    }

    #[test]
    fn weather_url() {
        let client = WeatherClient::new(ClientConfig::weather()).unwrap();
        assert_eq!(client.url(), "https://api.open-meteo.com/v1/forecast");
    }

    #[tokio::test]
    async fn unreachable_host_is_an_http_error() {
        // Port 9 (discard) on localhost is closed on any sane test machine.
        let client = GoldPriceClient::new(
            ClientConfig::gold()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(2),
        )
        .unwrap();

        let result = client.fetch_spot_price().await;
        assert!(matches!(result, Err(SourceError::Http(_))));
    }

    // Live-feed tests would go here, but they depend on third-party uptime.
    // They should be marked with #[ignore] and run separately.
}
