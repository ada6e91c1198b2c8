//! Adapter from `rand` generators to [`RandomSource`].

use gridbot_core::RandomSource;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Wraps any [`RngCore`] as a [`RandomSource`].
///
/// Draws use the standard `f64` distribution, which is uniform on
/// `[0, 1)`.
#[derive(Clone, Debug)]
pub struct RngSource<R>(R);

impl<R: RngCore> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic ChaCha8 source: identical seeds replay identical draws.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// ChaCha8 source seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: RngCore + Send> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}
