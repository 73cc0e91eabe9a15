//! Weighted random draw over a candidate list.
//!
//! Each candidate rolls a uniform integer in `[1, ceil(base_weight +
//! fragmentation)]`; the highest roll wins and ties are broken uniformly at
//! random among the tied candidates. Fragmentation widens every candidate's
//! range by the same amount, flattening the weight differences.
use rand::{Rng, RngExt};

use crate::surface::weighting::Candidate;

/// Draws one winner from `candidates`, or `None` when the list is empty.
pub fn pick_weighted<R: Rng>(
    candidates: &[Candidate],
    fragmentation: u32,
    rng: &mut R,
) -> Option<Candidate> {
    let mut winner: Option<Candidate> = None;
    let mut best_roll = 0u64;
    let mut tied = 0u64;

    for candidate in candidates {
        let ceiling = (candidate.base_weight + f64::from(fragmentation)).ceil() as u64;
        let roll = rng.random_range(1..=ceiling.max(1));

        if roll > best_roll {
            best_roll = roll;
            tied = 1;
            winner = Some(*candidate);
        } else if roll == best_roll {
            // Reservoir tie-break keeps every tied candidate equally likely.
            tied += 1;
            if rng.random_range(0..tied) == 0 {
                winner = Some(*candidate);
            }
        }
    }

    winner
}
