//! Price and weather derivation.
//!
//! Turns upstream quotes into display strings. Derivations never fail:
//! a missing gold quote becomes a jittered fallback price and a missing
//! temperature becomes a sentinel.

mod config;
mod format;
mod gold;
mod jitter;
mod quote;
mod weather;

pub use config::{PricingConfig, USD_TO_AED};
pub use format::format_amount;
pub use gold::{
    DerivedPrice, GRAMS_PER_TROY_OUNCE, PURITY_22K, convert_spot_to_22k_per_gram,
    derive_gold_display_price,
};
pub use jitter::{FixedJitter, Jitter, RandomJitter};
pub use quote::Quote;
pub use weather::{WEATHER_SENTINEL, derive_weather_display};
