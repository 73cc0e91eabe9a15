//! Candidate scanning and base weight computation for one phase round.
//!
//! Every cell currently holding a source type of the phase is scored by, in
//! order: the mode's positional bonus, attraction toward neighbors already
//! holding a destination type, the seeding edge bonus, attraction toward the
//! phase's explicit adjacency types, the no-adjacency veto, and finally the
//! mode's hard filter. Cells that end with a positive weight become
//! candidates for the weighted draw.
use crate::surface::grid::SurfaceGrid;
use crate::surface::phase::Phase;
use crate::surface::FieldId;

/// A cell eligible for mutation in the current phase round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub x: usize,
    pub y: usize,
    pub base_weight: f64,
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

/// Adjacency score of `(x, y)` against one field type: 1 per orthogonal
/// match, 0.5 per diagonal match. Out-of-range neighbors never match.
fn adjacency_score(grid: &SurfaceGrid, x: usize, y: usize, field: FieldId) -> f64 {
    let (x, y) = (x as isize, y as isize);
    let mut score = 0.0;
    for (dx, dy) in ORTHOGONAL {
        if grid.matches(x + dx, y + dy, field) {
            score += 1.0;
        }
    }
    for (dx, dy) in DIAGONAL {
        if grid.matches(x + dx, y + dy, field) {
            score += 0.5;
        }
    }
    score
}

/// Sideways score for the seeding edge bonus: 2 per matching left/right
/// orthogonal neighbor.
fn edge_seed_score(grid: &SurfaceGrid, x: usize, y: usize, field: FieldId) -> f64 {
    let (x, y) = (x as isize, y as isize);
    let mut score = 0.0;
    for dx in [-1, 1] {
        if grid.matches(x + dx, y, field) {
            score += 2.0;
        }
    }
    score
}

/// Scans `grid` and returns all cells eligible for mutation under `phase`,
/// each with its computed base weight. An empty result means the phase has no
/// legal move this round.
pub fn collect_candidates(grid: &SurfaceGrid, phase: &Phase) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(current) = grid.get(x, y) else {
                continue;
            };
            if !phase.converts_from(current) {
                continue;
            }

            let mut weight = 1.0;
            weight += phase.mode.positional_bonus(x, y, grid);

            if phase.mode.clusters_toward_targets() {
                // A destination appearing in several pairs is scored once per pair.
                for &(_, to) in &phase.transformations {
                    weight += adjacency_score(grid, x, y, to);
                }
            }

            if phase.mode.seeds_along_edge(y, grid) {
                for &(_, to) in &phase.transformations {
                    weight += edge_seed_score(grid, x, y, to);
                }
            }

            for &field in &phase.adjacent {
                weight += adjacency_score(grid, x, y, field);
            }

            for &field in &phase.no_adjacent {
                if adjacency_score(grid, x, y, field) > phase.no_adjacent_limit {
                    weight = 0.0;
                }
            }

            if !phase.mode.permits(x, y, grid, &phase.adjacent, weight) {
                weight = 0.0;
            }

            if weight > 0.0 {
                candidates.push(Candidate {
                    x,
                    y,
                    base_weight: weight,
                });
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::mode::Mode;

    const SEA: FieldId = 201;
    const LAND: FieldId = 101;
    const ICE: FieldId = 501;

    #[test]
    fn only_source_cells_become_candidates() {
        let mut grid = SurfaceGrid::new(3, 3, SEA);
        grid.set(1, 1, LAND);

        let phase = Phase::new(Mode::Nocluster, 1).with_transformation(LAND, 111);
        let candidates = collect_candidates(&grid, &phase);

        assert_eq!(candidates.len(), 1);
        assert_eq!((candidates[0].x, candidates[0].y), (1, 1));
        assert_eq!(candidates[0].base_weight, 1.0);
    }

    #[test]
    fn clustering_scores_orthogonal_and_diagonal_targets() {
        let mut grid = SurfaceGrid::new(3, 3, SEA);
        grid.set(1, 0, LAND); // orthogonal neighbor of the center
        grid.set(0, 0, LAND); // diagonal neighbor of the center

        let phase = Phase::new(Mode::Cluster, 1).with_transformation(SEA, LAND);
        let candidates = collect_candidates(&grid, &phase);

        let center = candidates
            .iter()
            .find(|c| c.x == 1 && c.y == 1)
            .expect("center is a candidate");
        assert_eq!(center.base_weight, 1.0 + 1.0 + 0.5);
    }

    #[test]
    fn duplicate_destination_pairs_are_scored_twice() {
        let mut grid = SurfaceGrid::new(3, 1, SEA);
        grid.set(0, 0, LAND);

        let phase = Phase::new(Mode::Cluster, 1)
            .with_transformations([(SEA, LAND), (SEA, LAND)]);
        let candidates = collect_candidates(&grid, &phase);

        let next = candidates
            .iter()
            .find(|c| c.x == 1 && c.y == 0)
            .expect("neighbor is a candidate");
        assert_eq!(next.base_weight, 1.0 + 2.0);
    }

    #[test]
    fn explicit_adjacency_scores_like_clustering() {
        let mut grid = SurfaceGrid::new(3, 3, SEA);
        grid.set(1, 0, ICE);

        let phase = Phase::new(Mode::Nocluster, 1)
            .with_transformation(SEA, LAND)
            .with_adjacent(vec![ICE]);
        let candidates = collect_candidates(&grid, &phase);

        let below = candidates
            .iter()
            .find(|c| c.x == 1 && c.y == 1)
            .expect("cell below the ice is a candidate");
        assert_eq!(below.base_weight, 2.0);
        let corner = candidates
            .iter()
            .find(|c| c.x == 0 && c.y == 1)
            .expect("diagonal cell is a candidate");
        assert_eq!(corner.base_weight, 1.5);
    }

    #[test]
    fn veto_removes_cells_over_the_no_adjacency_limit() {
        let mut grid = SurfaceGrid::new(3, 3, SEA);
        for (x, y) in [(1, 0), (1, 2), (0, 1), (2, 1)] {
            grid.set(x, y, ICE);
        }

        let phase = Phase::new(Mode::Nocluster, 1)
            .with_transformation(SEA, LAND)
            .with_no_adjacent(vec![ICE], 0.0);
        let candidates = collect_candidates(&grid, &phase);

        assert!(!candidates.iter().any(|c| c.x == 1 && c.y == 1));
    }

    #[test]
    fn veto_tolerates_scores_at_the_limit() {
        let mut grid = SurfaceGrid::new(3, 3, SEA);
        grid.set(1, 0, ICE);

        let phase = Phase::new(Mode::Nocluster, 1)
            .with_transformation(SEA, LAND)
            .with_no_adjacent(vec![ICE], 1.0);
        let candidates = collect_candidates(&grid, &phase);

        // Exactly one orthogonal match scores 1.0, which is not above the limit.
        assert!(candidates.iter().any(|c| c.x == 1 && c.y == 1));
    }

    #[test]
    fn forced_adjacency_drops_isolated_cells() {
        let mut grid = SurfaceGrid::new(4, 1, SEA);
        grid.set(3, 0, ICE);

        let phase = Phase::new(Mode::ForcedAdjacency, 1)
            .with_transformation(SEA, LAND)
            .with_adjacent(vec![ICE]);
        let candidates = collect_candidates(&grid, &phase);

        // Only the cell next to the ice reaches weight 2.
        assert_eq!(candidates.len(), 1);
        assert_eq!((candidates[0].x, candidates[0].y), (2, 0));
    }

    #[test]
    fn polar_seeding_north_rewards_sideways_growth() {
        let mut grid = SurfaceGrid::new(3, 4, SEA);
        grid.set(0, 0, ICE);

        let phase = Phase::new(Mode::PolarSeedingNorth, 1).with_transformation(SEA, ICE);
        let candidates = collect_candidates(&grid, &phase);

        // Row 0 gets +2 positional; next to the seed another +2 sideways.
        let beside = candidates
            .iter()
            .find(|c| c.x == 1 && c.y == 0)
            .expect("cell beside the seed");
        assert_eq!(beside.base_weight, 5.0);
        let far = candidates
            .iter()
            .find(|c| c.x == 2 && c.y == 0)
            .expect("far cell on the seed row");
        assert_eq!(far.base_weight, 3.0);
        // Rows past 1 are filtered out entirely.
        assert!(candidates.iter().all(|c| c.y <= 1));
    }

    #[test]
    fn strict_polar_restricts_to_outer_rows() {
        let grid = SurfaceGrid::new(2, 5, SEA);
        let phase = Phase::new(Mode::StrictPolar, 1).with_transformation(SEA, ICE);
        let candidates = collect_candidates(&grid, &phase);

        assert!(candidates.iter().all(|c| c.y == 0 || c.y == 4));
        // Outer rows get the +1 polar bonus.
        assert!(candidates.iter().all(|c| c.base_weight >= 2.0));
    }

    #[test]
    fn crater_seeding_excludes_the_far_edges() {
        let grid = SurfaceGrid::new(3, 3, SEA);
        let phase = Phase::new(Mode::CraterSeeding, 1).with_transformation(SEA, 421);
        let candidates = collect_candidates(&grid, &phase);

        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|c| c.x < 2 && c.y < 2));
    }

    #[test]
    fn empty_result_signals_no_legal_move() {
        let grid = SurfaceGrid::new(3, 3, SEA);
        let phase = Phase::new(Mode::Cluster, 1).with_transformation(LAND, ICE);
        assert!(collect_candidates(&grid, &phase).is_empty());
    }
}
