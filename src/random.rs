//! Injectable randomness for the forecast jitter.
//!
//! The forecaster never reaches for an ambient generator: callers hand it a
//! [`RandomSource`], typically an [`RngSource`] wrapping a seeded [`StdRng`] in tests
//! and an entropy-seeded one in production.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws.
pub trait RandomSource {
    /// Draw from the uniform distribution on `[low, high)`. Returns `low` when the
    /// interval is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Adapter from any [`rand::Rng`] to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Reproducible source seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low < high {
            self.0.random_range(low..high)
        } else {
            low
        }
    }
}
