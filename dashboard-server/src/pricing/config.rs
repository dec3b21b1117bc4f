//! Price derivation configuration.

use super::jitter::clamp_bound;

/// Default synthetic spot price used when the live quote is missing (USD/oz).
const DEFAULT_REFERENCE_PRICE: f64 = 4330.0;

/// Default half-width of the fallback jitter (USD/oz).
const DEFAULT_JITTER_BOUND: f64 = 10.0;

/// UAE dirham peg against the US dollar.
pub const USD_TO_AED: f64 = 3.6725;

/// Configuration for the gold price pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Spot price substituted when the upstream quote is unusable (USD/oz).
    pub reference_price: f64,

    /// The fallback is `reference_price` plus a uniform offset in
    /// `[-jitter_bound, jitter_bound]`.
    pub jitter_bound: f64,

    /// Multiplier from USD to the display currency.
    pub exchange_rate: f64,

    /// Prefix of the display string.
    pub currency_code: String,
}

impl PricingConfig {
    /// Set the fallback reference price.
    pub fn with_reference_price(mut self, price: f64) -> Self {
        self.reference_price = price;
        self
    }

    /// Set the fallback jitter bound. Negative bounds are mirrored, huge ones
    /// capped, and non-finite ones disable jitter.
    pub fn with_jitter_bound(mut self, bound: f64) -> Self {
        self.jitter_bound = clamp_bound(bound);
        self
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            reference_price: DEFAULT_REFERENCE_PRICE,
            jitter_bound: DEFAULT_JITTER_BOUND,
            exchange_rate: USD_TO_AED,
            currency_code: "AED".to_string(),
        }
    }
}
