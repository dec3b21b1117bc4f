//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::dashboard::DriverConfig;
use crate::pricing::PricingConfig;
use crate::sources::Coordinates;

/// Error for an environment variable that is set but unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{var}: {reason}")]
    OutOfRange {
        var: &'static str,
        reason: &'static str,
    },
}

/// Settings for the server binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Serve mock quotes instead of calling the live feeds.
    pub offline: bool,

    pub pricing: PricingConfig,
    pub driver: DriverConfig,

    /// Pass-through device readings.
    pub steps: Option<u64>,
    pub battery_percent: Option<u8>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            offline: false,
            pricing: PricingConfig::default(),
            driver: DriverConfig::default(),
            steps: None,
            battery_percent: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = parse_var(&lookup, "DASHBOARD_ADDR")? {
            config.addr = addr;
        }
        if let Some(offline) = lookup("DASHBOARD_OFFLINE") {
            config.offline = parse_flag("DASHBOARD_OFFLINE", &offline)?;
        }

        if let Some(price) = parse_var::<f64>(&lookup, "GOLD_REFERENCE_PRICE")? {
            if !price.is_finite() || price <= 0.0 {
                return Err(ConfigError::OutOfRange {
                    var: "GOLD_REFERENCE_PRICE",
                    reason: "must be a positive number",
                });
            }
            config.pricing = config.pricing.with_reference_price(price);
        }
        if let Some(bound) = parse_var::<f64>(&lookup, "GOLD_FALLBACK_JITTER")? {
            if !bound.is_finite() {
                return Err(ConfigError::OutOfRange {
                    var: "GOLD_FALLBACK_JITTER",
                    reason: "must be finite",
                });
            }
            config.pricing = config.pricing.with_jitter_bound(bound);
        }
        if config.pricing.jitter_bound >= config.pricing.reference_price {
            return Err(ConfigError::OutOfRange {
                var: "GOLD_FALLBACK_JITTER",
                reason: "must be below the reference price",
            });
        }

        let latitude = parse_var::<f64>(&lookup, "WEATHER_LATITUDE")?;
        let longitude = parse_var::<f64>(&lookup, "WEATHER_LONGITUDE")?;
        if latitude.is_some() || longitude.is_some() {
            let default = Coordinates::DUBAI;
            let latitude = latitude.unwrap_or(default.latitude);
            let longitude = longitude.unwrap_or(default.longitude);
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(ConfigError::OutOfRange {
                    var: "WEATHER_LATITUDE",
                    reason: "must be within -90..=90",
                });
            }
            if !(-180.0..=180.0).contains(&longitude) {
                return Err(ConfigError::OutOfRange {
                    var: "WEATHER_LONGITUDE",
                    reason: "must be within -180..=180",
                });
            }
            config.driver = config
                .driver
                .with_location(Coordinates::new(latitude, longitude));
        }

        if let Some(secs) = parse_var::<u64>(&lookup, "MARKET_REFRESH_SECS")? {
            if secs == 0 {
                return Err(ConfigError::OutOfRange {
                    var: "MARKET_REFRESH_SECS",
                    reason: "must be at least 1",
                });
            }
            config.driver = config.driver.with_market_refresh(Duration::from_secs(secs));
        }
        if let Some(millis) = parse_var::<u64>(&lookup, "SCHEDULE_TICK_MILLIS")? {
            if millis == 0 {
                return Err(ConfigError::OutOfRange {
                    var: "SCHEDULE_TICK_MILLIS",
                    reason: "must be at least 1",
                });
            }
            config.driver = config
                .driver
                .with_schedule_tick(Duration::from_millis(millis));
        }

        config.steps = parse_var(&lookup, "DEVICE_STEPS")?;
        if let Some(battery) = parse_var::<u8>(&lookup, "DEVICE_BATTERY")? {
            if battery > 100 {
                return Err(ConfigError::OutOfRange {
                    var: "DEVICE_BATTERY",
                    reason: "must be a percentage",
                });
            }
            config.battery_percent = Some(battery);
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            var,
            value: raw.clone(),
        })
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| env.get(var).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert!(!config.offline);
        assert_eq!(config.pricing.reference_price, 4330.0);
        assert_eq!(config.pricing.jitter_bound, 10.0);
        assert_eq!(config.driver.location, Coordinates::DUBAI);
        assert_eq!(config.driver.market_refresh, Duration::from_secs(60));
        assert_eq!(config.driver.schedule_tick, Duration::from_secs(1));
        assert_eq!(config.steps, None);
        assert_eq!(config.battery_percent, None);
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("DASHBOARD_ADDR", "0.0.0.0:8080"),
            ("DASHBOARD_OFFLINE", "true"),
            ("GOLD_REFERENCE_PRICE", "4000"),
            ("GOLD_FALLBACK_JITTER", "0"),
            ("WEATHER_LATITUDE", "51.5"),
            ("WEATHER_LONGITUDE", "-0.12"),
            ("MARKET_REFRESH_SECS", "300"),
            ("SCHEDULE_TICK_MILLIS", "250"),
            ("DEVICE_STEPS", "5230"),
            ("DEVICE_BATTERY", "76"),
        ])
        .unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert!(config.offline);
        assert_eq!(config.pricing.reference_price, 4000.0);
        assert_eq!(config.pricing.jitter_bound, 0.0);
        assert_eq!(config.driver.location, Coordinates::new(51.5, -0.12));
        assert_eq!(config.driver.market_refresh, Duration::from_secs(300));
        assert_eq!(config.driver.schedule_tick, Duration::from_millis(250));
        assert_eq!(config.steps, Some(5230));
        assert_eq!(config.battery_percent, Some(76));
    }

    #[test]
    fn partial_location_keeps_other_default() {
        let config = load(&[("WEATHER_LATITUDE", "24.45")]).unwrap();
        assert_eq!(
            config.driver.location,
            Coordinates::new(24.45, Coordinates::DUBAI.longitude)
        );
    }

    #[test]
    fn blank_values_are_unset() {
        let config = load(&[("DEVICE_STEPS", "  "), ("DASHBOARD_OFFLINE", "")]).unwrap();
        assert_eq!(config.steps, None);
        assert!(!config.offline);
    }

    #[test]
    fn jitter_error_names_the_limit() {
        let err = load(&[("GOLD_FALLBACK_JITTER", "-5000")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "GOLD_FALLBACK_JITTER: must be below the reference price"
        );
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = load(&[("MARKET_REFRESH_SECS", "soon")]).unwrap_err();
        assert_eq!(err.to_string(), "MARKET_REFRESH_SECS: cannot parse \"soon\"");

        assert!(load(&[("DASHBOARD_ADDR", "localhost")]).is_err());
        assert!(load(&[("DASHBOARD_OFFLINE", "maybe")]).is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(load(&[("GOLD_REFERENCE_PRICE", "0")]).is_err());
        assert!(load(&[("GOLD_REFERENCE_PRICE", "-5")]).is_err());
        assert!(load(&[("GOLD_FALLBACK_JITTER", "inf")]).is_err());
        assert!(load(&[("GOLD_FALLBACK_JITTER", "1e308")]).is_err());
        assert!(load(&[("GOLD_FALLBACK_JITTER", "4330")]).is_err());
        // Default jitter of 10 is too wide for a reference of 5.
        assert!(load(&[("GOLD_REFERENCE_PRICE", "5")]).is_err());
        assert!(load(&[("WEATHER_LATITUDE", "91")]).is_err());
        assert!(load(&[("MARKET_REFRESH_SECS", "0")]).is_err());
        assert!(load(&[("DEVICE_BATTERY", "101")]).is_err());
        // Does not fit in a u8 at all.
        assert!(load(&[("DEVICE_BATTERY", "300")]).is_err());
    }
}
