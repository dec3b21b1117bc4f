//! Random offsets for the fallback price.

use rand::Rng;

/// Largest usable bound. Keeps the width of `[-bound, bound]` finite.
pub const MAX_JITTER_BOUND: f64 = f64::MAX / 4.0;

/// Normalise a bound: absolute, finite and at most [`MAX_JITTER_BOUND`].
/// Non-finite bounds disable jitter.
pub fn clamp_bound(bound: f64) -> f64 {
    if bound.is_finite() {
        bound.abs().min(MAX_JITTER_BOUND)
    } else {
        0.0
    }
}

/// Source of the symmetric offset applied to the fallback price.
pub trait Jitter: Send + Sync {
    /// An offset in `[-bound, bound]`.
    fn offset(&self, bound: f64) -> f64;
}

/// Uniformly random offsets from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJitter;

impl Jitter for RandomJitter {
    fn offset(&self, bound: f64) -> f64 {
        let bound = clamp_bound(bound);
        if bound == 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(-bound..=bound)
    }
}

/// A fixed offset, clamped to the bound. Used to make fallbacks reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn offset(&self, bound: f64) -> f64 {
        let bound = clamp_bound(bound);
        self.0.clamp(-bound, bound)
    }
}
