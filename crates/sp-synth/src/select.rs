//! Distance-weighted work-district selection.
//!
//! Candidates are ranked by the distance between district centers, nearest
//! first, and a rank is drawn from the distance-rank distribution.  Ranks
//! beyond the number of candidates are cut off before drawing.  A drawn
//! district without a free workplace is redrawn; after
//! `candidates × retry_factor` failed draws the nearest district that still
//! has a free workplace is taken instead.

use log::warn;

use sp_core::{Point, SynthRng};

use crate::{District, EmpiricalDistribution, SynthError, SynthResult};

/// Order `candidates` by distance from `origin`, nearest first.
///
/// Ties keep candidate order.  A district without a center (or any district
/// when `origin` is `None`) sorts last.
pub fn rank_by_distance(
    origin:     Option<Point>,
    districts:  &[District],
    candidates: &[usize],
) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = candidates
        .iter()
        .map(|&idx| {
            let dist = match (origin, districts[idx].center()) {
                (Some(o), Some(c)) => o.distance(c),
                _ => f64::INFINITY,
            };
            (idx, dist)
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(idx, _)| idx).collect()
}

/// Pick a work district for an inhabitant of `districts[home]`.
///
/// Returns an index into `districts` whose district has a free workplace,
/// or [`SynthError::NoWorkplaceCapacity`] if no candidate has one.
pub fn select_work_district(
    districts:    &[District],
    home:         usize,
    candidates:   &[usize],
    scores:       &EmpiricalDistribution,
    retry_factor: u32,
    rng:          &mut SynthRng,
) -> SynthResult<usize> {
    let ranked = rank_by_distance(districts[home].center(), districts, candidates);

    let truncated;
    let dist = if ranked.len() >= scores.len() {
        Some(scores)
    } else {
        truncated = scores.truncated(ranked.len());
        truncated.as_ref()
    };

    if let Some(dist) = dist {
        let max_draws = ranked.len().saturating_mul(retry_factor.max(1) as usize);
        for _ in 0..max_draws {
            let candidate = ranked[dist.sample(rng)];
            if districts[candidate].has_free_workplace() {
                return Ok(candidate);
            }
        }
    }

    match ranked.iter().copied().find(|&c| districts[c].has_free_workplace()) {
        Some(c) => {
            warn!(
                "work district for {}: draws exhausted, taking nearest free district {}",
                districts[home].name(),
                districts[c].name()
            );
            Ok(c)
        }
        None => Err(SynthError::NoWorkplaceCapacity {
            home: districts[home].name().to_owned(),
        }),
    }
}
