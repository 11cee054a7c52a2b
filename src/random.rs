//! Injectable random source.
//!
//! Everything stochastic in the crate (shuffles, `p10`, the random generator
//! patterns) draws from a [`RandomSource`]. By default that is one
//! process-wide, entropy-seeded instance; tests pass a seeded source (or
//! reseed the global one) to get reproducible output.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static GLOBAL: OnceLock<RandomSource> = OnceLock::new();

/// Shared handle to a random number generator.
///
/// Cloning the handle shares the underlying generator, so two patterns built
/// from clones of one seeded source draw from a single stream.
#[derive(Clone)]
pub struct RandomSource {
    rng: Arc<Mutex<StdRng>>,
}

impl RandomSource {
    /// The process-wide source used when no other is supplied
    pub fn global() -> RandomSource {
        GLOBAL.get_or_init(RandomSource::from_entropy).clone()
    }

    /// A fresh, independent source seeded from the OS
    pub fn from_entropy() -> RandomSource {
        RandomSource {
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// A fresh, independent source with a fixed seed
    pub fn seeded(seed: u64) -> RandomSource {
        RandomSource {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Restart this source (and every clone of it) from `seed`
    pub fn reseed(&self, seed: u64) {
        *self.lock() = StdRng::seed_from_u64(seed);
    }

    /// Uniform integer in `[low, high)`. Caller guarantees `low < high`.
    pub fn int_in(&self, low: i64, high: i64) -> i64 {
        self.lock().gen_range(low..high)
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&self) -> f64 {
        self.lock().gen::<f64>()
    }

    /// Uniform index in `[0, len)`. Caller guarantees `len > 0`.
    pub fn index(&self, len: usize) -> usize {
        self.lock().gen_range(0..len)
    }

    /// Triangular distribution over `[low, high]` with the given mode.
    ///
    /// Inverse-CDF sampling from one uniform draw.
    pub fn triangular(&self, low: f64, high: f64, mode: f64) -> f64 {
        if high == low {
            return low;
        }
        let u = self.unit();
        let c = (mode - low) / (high - low);
        if u > c {
            high + (low - high) * ((1.0 - u) * (1.0 - c)).sqrt()
        } else {
            low + (high - low) * (u * c).sqrt()
        }
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.lock());
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A poisoned generator is still a valid generator
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        RandomSource::global()
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}
