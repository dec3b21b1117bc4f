//! Gold spot price → 22k per-gram display price.
//!
//! The upstream quote is USD per troy ounce of 24k gold. Jewellers in the
//! UAE quote 22k gold per gram in dirhams, so the quote goes through three
//! fixed stages: ounces to grams, 24k to 22k purity, USD to AED.

use super::config::PricingConfig;
use super::format::format_amount;
use super::jitter::Jitter;
use super::quote::Quote;

/// Grams in one troy ounce.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// Fraction of pure gold in 22-karat gold.
pub const PURITY_22K: f64 = 22.0 / 24.0;

/// A display-ready gold price.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPrice {
    /// e.g. "AED 335.53"
    pub display: String,

    /// The unrounded converted value.
    pub per_gram: f64,

    /// Whether the synthetic fallback was used instead of a live quote.
    pub used_fallback: bool,
}

/// Convert a USD/oz 24k spot price to display-currency per gram of 22k.
///
/// Stages are applied in a fixed order so rounding is reproducible.
pub fn convert_spot_to_22k_per_gram(usd_per_ounce: f64, exchange_rate: f64) -> f64 {
    let usd_per_gram_24k = usd_per_ounce / GRAMS_PER_TROY_OUNCE;
    let usd_per_gram_22k = usd_per_gram_24k * PURITY_22K;
    usd_per_gram_22k * exchange_rate
}

/// Derive the gold display price from a quote.
///
/// Never fails. A failed, zero, negative or non-finite quote is replaced by
/// the configured reference price plus a bounded random offset, and the
/// result reports `used_fallback`.
///
/// # Examples
///
/// ```
/// use dashboard_server::pricing::{FixedJitter, PricingConfig, Quote, derive_gold_display_price};
///
/// let config = PricingConfig::default();
/// let price = derive_gold_display_price(&Quote::available(3100.0), &config, &FixedJitter(0.0));
///
/// assert_eq!(price.display, "AED 335.53");
/// assert!(!price.used_fallback);
/// ```
pub fn derive_gold_display_price(
    quote: &Quote,
    config: &PricingConfig,
    jitter: &dyn Jitter,
) -> DerivedPrice {
    let live = quote.value().filter(|v| v.is_finite() && *v > 0.0);

    let (usd_per_ounce, used_fallback) = match live {
        Some(v) => (v, false),
        None => {
            // The offset never takes the fallback below zero.
            let bound = config.jitter_bound.min(config.reference_price.abs());
            (config.reference_price + jitter.offset(bound), true)
        }
    };

    let per_gram = convert_spot_to_22k_per_gram(usd_per_ounce, config.exchange_rate);

    DerivedPrice {
        display: format!("{} {}", config.currency_code, format_amount(per_gram)),
        per_gram,
        used_fallback,
    }
}
