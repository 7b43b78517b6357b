//! Empirical discrete distributions.
//!
//! Both tables are indexed by an integer bucket and sampled with
//! `rand`'s `WeightedIndex`.  Weights need not sum to 1; they are normalized
//! on construction and [`EmpiricalDistribution::probability`] reports the
//! normalized value.

use rand::distributions::WeightedIndex;

use sp_core::SynthRng;

use crate::{SynthError, SynthResult};

/// Share of commuters leaving home in each hour of the day (0..=23).
pub const HOURLY_DEPARTURE_WEIGHTS: [f64; 24] = [
    0.0, 0.005, 0.005, 0.005, 0.015, 0.075, 0.235, 0.305, 0.12, 0.04, 0.03, 0.01,
    0.03, 0.05, 0.02, 0.01, 0.005, 0.01, 0.005, 0.005, 0.01, 0.005, 0.0, 0.005,
];

/// Preference score of the work district's distance rank (0 = the home
/// district itself, 1 = the nearest other district, …).
pub const DISTANCE_RANK_SCORES: [f64; 27] = [
    5.0, 23.0, 35.0, 38.0, 43.0, 45.5, 45.0, 42.5, 38.0, 34.5, 26.5, 21.5, 19.0, 16.0,
    13.0, 10.0, 7.5, 5.5, 4.0, 3.0, 2.0, 1.5, 1.0, 0.5, 0.35, 0.2, 0.1,
];

/// A fixed probability table over buckets `0..len()`.
#[derive(Clone, Debug)]
pub struct EmpiricalDistribution {
    probabilities: Vec<f64>,
    index:         WeightedIndex<f64>,
}

impl EmpiricalDistribution {
    /// Build from non-negative, finite weights with a positive sum.
    pub fn new(weights: &[f64]) -> SynthResult<Self> {
        if weights.is_empty() {
            return Err(SynthError::InvalidDistribution("empty weight table".to_owned()));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(SynthError::InvalidDistribution(format!("invalid weight {w}")));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(SynthError::InvalidDistribution("all weights are zero".to_owned()));
        }

        let index = WeightedIndex::new(weights)
            .map_err(|e| SynthError::InvalidDistribution(e.to_string()))?;
        Ok(Self {
            probabilities: weights.iter().map(|w| w / total).collect(),
            index,
        })
    }

    /// Hour-of-day home departure distribution.
    pub fn hourly_departures() -> SynthResult<Self> {
        Self::new(&HOURLY_DEPARTURE_WEIGHTS)
    }

    /// Distance-rank preference distribution.
    pub fn distance_ranks() -> SynthResult<Self> {
        Self::new(&DISTANCE_RANK_SCORES)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Normalized probability of `bucket`; 0 outside the table.
    pub fn probability(&self, bucket: usize) -> f64 {
        self.probabilities.get(bucket).copied().unwrap_or(0.0)
    }

    /// Draw a bucket index.
    #[inline]
    pub fn sample(&self, rng: &mut SynthRng) -> usize {
        rng.sample(&self.index)
    }

    /// The distribution restricted to the first `n` buckets, renormalized.
    ///
    /// `None` if those buckets carry no weight (or `n == 0`).
    pub fn truncated(&self, n: usize) -> Option<Self> {
        let n = n.min(self.len());
        Self::new(&self.probabilities[..n]).ok()
    }
}
