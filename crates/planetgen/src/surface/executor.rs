//! Applies one phase to a grid.
use rand::{Rng, RngExt};
use tracing::debug;

use crate::surface::grid::SurfaceGrid;
use crate::surface::mode::Mode;
use crate::surface::phase::Phase;
use crate::surface::selection::pick_weighted;
use crate::surface::weighting::collect_candidates;

/// Runs `phase` against `grid`, mutating it in place.
///
/// Full-surface phases rewrite every cell deterministically. All other
/// phases perform up to `phase.repetitions` weighted pick-and-mutate rounds,
/// stopping early once no eligible candidate remains; finishing with fewer
/// mutations than requested is an accepted outcome, not an error.
pub fn apply_phase<R: Rng>(grid: &mut SurfaceGrid, phase: &Phase, rng: &mut R) {
    if phase.mode == Mode::FullSurface {
        let mut code = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                code += 1;
                grid.set(x, y, phase.category * 100 + code);
            }
        }
        return;
    }

    for round in 0..phase.repetitions {
        let candidates = collect_candidates(grid, phase);
        let Some(winner) = pick_weighted(&candidates, phase.fragmentation, rng) else {
            debug!(
                round,
                repetitions = phase.repetitions,
                "phase ran out of candidates"
            );
            break;
        };

        let Some(current) = grid.get(winner.x, winner.y) else {
            continue;
        };
        let targets = phase.targets_for(current);
        if let Some(&target) = targets.get(rng.random_range(0..targets.len().max(1))) {
            grid.set(winner.x, winner.y, target);
        }
    }
}
