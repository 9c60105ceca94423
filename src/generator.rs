//! Random input arrays for the algorithms under test.
//!
//! Inputs are generated before the timed region starts; nothing in this
//! module runs while a timer is active.
//!
//! # Example
//!
//! ```
//! use algorithm_analysis::ArrayGenerator;
//!
//! let mut generator = ArrayGenerator::seeded(7);
//! let data = generator.generate(100);
//! assert_eq!(data.len(), 100);
//! assert!(data.iter().all(|&v| (0..1_000_000).contains(&v)));
//! ```

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::DEFAULT_VALUE_BOUND;

/// Produces arrays of integers drawn uniformly from `[0, bound)`.
///
/// The random source is injectable: production runs use the OS-seeded
/// thread RNG, tests use [`ArrayGenerator::seeded`] for reproducible arrays.
#[derive(Debug, Clone)]
pub struct ArrayGenerator<R = ThreadRng> {
    rng: R,
    bound: i32,
}

impl ArrayGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local, OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for ArrayGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayGenerator<Xoshiro256PlusPlus> {
    /// Create a deterministic generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> ArrayGenerator<R> {
    /// Wrap an arbitrary random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            bound: DEFAULT_VALUE_BOUND,
        }
    }

    /// Set the exclusive upper bound of generated values.
    ///
    /// # Panics
    ///
    /// Panics if `bound <= 0`.
    pub fn with_bound(mut self, bound: i32) -> Self {
        assert!(bound > 0, "value bound must be positive, got {}", bound);
        self.bound = bound;
        self
    }

    /// The exclusive upper bound of generated values.
    pub fn bound(&self) -> i32 {
        self.bound
    }

    /// Generate `size` independent values in `[0, bound)`.
    pub fn generate(&mut self, size: usize) -> Vec<i32> {
        let bound = self.bound;
        (0..size).map(|_| self.rng.random_range(0..bound)).collect()
    }
}
