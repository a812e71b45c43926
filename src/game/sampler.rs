//! Answer sampling
//!
//! The game picks its hidden answer through this trait so tests can pin the
//! choice and a seeded game can be replayed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer sampler over `[0, bound)`
pub trait Sampler {
    /// Pick an index in `[0, bound)`; `bound` is always positive
    fn pick(&mut self, bound: usize) -> usize;
}

/// Production sampler backed by the operating system entropy source
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSampler;

impl Sampler for ThreadSampler {
    fn pick(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Deterministic sampler for reproducible games
///
/// The same seed over the same dictionary yields the same answer.
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    /// Create a sampler from a 64-bit seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for SeededSampler {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_sampler_stays_in_bounds() {
        let mut sampler = ThreadSampler;
        for bound in 1..=20 {
            assert!(sampler.pick(bound) < bound);
        }
    }

    #[test]
    fn seeded_sampler_stays_in_bounds() {
        let mut sampler = SeededSampler::new(42);
        for bound in 1..=20 {
            assert!(sampler.pick(bound) < bound);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut first = SeededSampler::new(7);
        let mut second = SeededSampler::new(7);

        for bound in [3, 10, 100, 1000] {
            assert_eq!(first.pick(bound), second.pick(bound));
        }
    }

    #[test]
    fn pick_with_bound_one_is_zero() {
        assert_eq!(SeededSampler::new(0).pick(1), 0);
        assert_eq!(ThreadSampler.pick(1), 0);
    }
}
