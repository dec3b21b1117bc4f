//! Mock sources for testing and offline mode.
//!
//! Serve a fixed value, or a fixed failure, as if it came from the live
//! feed. Values can be swapped at runtime to simulate an outage.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::SourceError;
use super::{Coordinates, GoldPriceSource, WeatherSource};

/// A value that is either served or reported as unavailable.
#[derive(Debug, Clone)]
struct Canned {
    value: Arc<RwLock<Option<f64>>>,
    fetches: Arc<AtomicUsize>,
}

impl Canned {
    fn new(value: Option<f64>) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    async fn serve(&self, what: &str) -> Result<f64, SourceError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let value = *self.value.read().await;
        value.ok_or_else(|| SourceError::Unavailable(format!("mock {what} has no value")))
    }
}

/// Mock gold price feed.
#[derive(Debug, Clone)]
pub struct MockGoldSource {
    canned: Canned,
}

impl MockGoldSource {
    /// Serve a fixed spot price (USD/oz).
    pub fn new(price: f64) -> Self {
        Self {
            canned: Canned::new(Some(price)),
        }
    }

    /// Fail every fetch.
    pub fn failing() -> Self {
        Self {
            canned: Canned::new(None),
        }
    }

    /// Replace the served price; `None` makes fetches fail.
    pub async fn set(&self, price: Option<f64>) {
        *self.canned.value.write().await = price;
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.canned.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl GoldPriceSource for MockGoldSource {
    async fn fetch_spot_price(&self) -> Result<f64, SourceError> {
        self.canned.serve("gold price").await
    }
}

/// Mock weather feed. Ignores the requested coordinates.
#[derive(Debug, Clone)]
pub struct MockWeatherSource {
    canned: Canned,
}

impl MockWeatherSource {
    /// Serve a fixed temperature (°C).
    pub fn new(celsius: f64) -> Self {
        Self {
            canned: Canned::new(Some(celsius)),
        }
    }

    /// Fail every fetch.
    pub fn failing() -> Self {
        Self {
            canned: Canned::new(None),
        }
    }

    /// Replace the served temperature; `None` makes fetches fail.
    pub async fn set(&self, celsius: Option<f64>) {
        *self.canned.value.write().await = celsius;
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.canned.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    async fn fetch_current_temperature(&self, _at: Coordinates) -> Result<f64, SourceError> {
        self.canned.serve("temperature").await
    }
}
