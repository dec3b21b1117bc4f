//! Temperature display.

use super::quote::Quote;

/// Shown when no temperature is available.
pub const WEATHER_SENTINEL: &str = "--";

/// Derive the temperature display string.
///
/// The value is shown as received, without rounding; whole numbers keep one
/// fraction digit ("31.0°C").
///
/// ```
/// use dashboard_server::pricing::{Quote, derive_weather_display};
///
/// assert_eq!(derive_weather_display(&Quote::available(31.4)), "31.4°C");
/// assert_eq!(derive_weather_display(&Quote::unavailable()), "--");
/// ```
pub fn derive_weather_display(quote: &Quote) -> String {
    match quote.value().filter(|v| v.is_finite()) {
        Some(celsius) if celsius.fract() == 0.0 => format!("{celsius:.1}°C"),
        Some(celsius) => format!("{celsius}°C"),
        None => WEATHER_SENTINEL.to_string(),
    }
}
