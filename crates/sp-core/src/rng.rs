//! Seedable run-level RNG.
//!
//! Every component that samples (home-district choice, distance-rank draws,
//! departure hours, node locations) takes a `&mut SynthRng` explicitly.
//! Nothing reads process-global random state, so a run is fully determined
//! by its seed and inputs.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG threaded through population synthesis.
///
/// Single-threaded by design: synthesis mutates shared district counters in
/// a fixed order, so one stream of random numbers is enough.
pub struct SynthRng(SmallRng);

impl SynthRng {
    pub fn new(seed: u64) -> Self {
        SynthRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw one value from any `rand` distribution.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice, `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
