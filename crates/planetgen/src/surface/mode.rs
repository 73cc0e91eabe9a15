//! Positional and adjacency rule sets a phase can run under.
//!
//! Every mode-specific rule lives in an exhaustive `match` here, so adding or
//! auditing one mode never touches the others. The weighting pass asks a mode
//! three questions: what positional bonus a cell gets, whether neighbors of a
//! destination type attract the cell, and whether the cell survives the mode's
//! hard filter.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::surface::grid::SurfaceGrid;
use crate::surface::FieldId;

/// The positional/adjacency rule set governing candidate scoring for a phase.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Plain clustering: no positional rule, destination neighbors attract.
    Cluster,
    /// No clustering at all; every source cell weighs the same.
    Nocluster,
    /// Favor and restrict to the two outermost row bands.
    Polar,
    /// Favor and restrict to the first and last row only.
    StrictPolar,
    /// Seed growth on the first row, spreading sideways.
    PolarSeedingNorth,
    /// Seed growth on the last row, spreading sideways.
    PolarSeedingSouth,
    /// Favor and restrict to the equatorial band of 5/6-row surfaces.
    Equatorial,
    /// Keep only cells with accumulated weight >= 2.
    ForcedAdjacency,
    /// Keep only cells with accumulated weight >= 1.5.
    ForcedRim,
    /// Restrict to the lower orbit row.
    LowerOrbit,
    /// Restrict to the upper orbit row.
    UpperOrbit,
    /// Restrict to the first column.
    TidalSeeding,
    /// Restrict to the top-left corner cell.
    TopLeft,
    /// Keep only cells whose left neighbor is the first adjacent type.
    Right,
    /// Keep only cells whose top neighbor is the first adjacent type.
    Below,
    /// Keep any cell except those on the last row or column.
    CraterSeeding,
    /// Deterministic full rewrite; handled by the executor, never weighted.
    FullSurface,
}

impl Mode {
    /// Positional weight bonus for the cell at `(x, y)`, independent of
    /// neighborhood contents.
    pub(crate) fn positional_bonus(self, x: usize, y: usize, grid: &SurfaceGrid) -> f64 {
        let last_row = grid.height() - 1;
        match self {
            Mode::Polar | Mode::StrictPolar if y == 0 || y == last_row => 1.0,
            Mode::TopLeft if x == 0 && y == 0 => 2.0,
            Mode::PolarSeedingNorth if y == 0 => 2.0,
            Mode::PolarSeedingSouth if y == last_row => 2.0,
            Mode::Equatorial
                if (y == 2 && grid.height() == 5)
                    || ((y == 2 || y == 3) && grid.height() == 6) =>
            {
                1.0
            }
            _ => 0.0,
        }
    }

    /// Whether cells are attracted toward neighbors already holding a
    /// destination type.
    pub(crate) fn clusters_toward_targets(self) -> bool {
        !matches!(
            self,
            Mode::Nocluster
                | Mode::ForcedAdjacency
                | Mode::ForcedRim
                | Mode::PolarSeedingNorth
                | Mode::PolarSeedingSouth
                | Mode::FullSurface
        )
    }

    /// Whether the seeding edge bonus applies to the cell at row `y`.
    pub(crate) fn seeds_along_edge(self, y: usize, grid: &SurfaceGrid) -> bool {
        match self {
            Mode::PolarSeedingNorth => y == 0,
            Mode::PolarSeedingSouth => y == grid.height() - 1,
            _ => false,
        }
    }

    /// Hard mode filter, applied after all bonuses. Returns false to force
    /// the cell's weight to zero.
    pub(crate) fn permits(
        self,
        x: usize,
        y: usize,
        grid: &SurfaceGrid,
        adjacent: &[FieldId],
        weight: f64,
    ) -> bool {
        let last_row = grid.height() - 1;
        let last_col = grid.width() - 1;
        match self {
            Mode::Cluster | Mode::Nocluster | Mode::FullSurface => true,
            Mode::ForcedAdjacency => weight >= 2.0,
            Mode::ForcedRim => weight >= 1.5,
            Mode::Polar => y <= 1 || y + 1 >= last_row,
            Mode::StrictPolar => y == 0 || y == last_row,
            Mode::PolarSeedingNorth => y <= 1,
            Mode::PolarSeedingSouth => y + 1 >= last_row,
            Mode::Equatorial => (y == 2 || y == 3) && (grid.height() == 5 || grid.height() == 6),
            Mode::LowerOrbit => y == 1,
            Mode::UpperOrbit => y == 0,
            Mode::TidalSeeding => x == 0,
            Mode::TopLeft => x == 0 && y == 0,
            Mode::Right => adjacent
                .first()
                .is_some_and(|&field| grid.matches(x as isize - 1, y as isize, field)),
            Mode::Below => adjacent
                .first()
                .is_some_and(|&field| grid.matches(x as isize, y as isize - 1, field)),
            Mode::CraterSeeding => y != last_row && x != last_col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize) -> SurfaceGrid {
        SurfaceGrid::new(width, height, 100)
    }

    #[test]
    fn polar_bonus_applies_on_first_and_last_row() {
        let g = grid(5, 5);
        assert_eq!(Mode::Polar.positional_bonus(2, 0, &g), 1.0);
        assert_eq!(Mode::Polar.positional_bonus(2, 4, &g), 1.0);
        assert_eq!(Mode::Polar.positional_bonus(2, 2, &g), 0.0);
    }

    #[test]
    fn top_left_bonus_only_on_origin() {
        let g = grid(4, 4);
        assert_eq!(Mode::TopLeft.positional_bonus(0, 0, &g), 2.0);
        assert_eq!(Mode::TopLeft.positional_bonus(1, 0, &g), 0.0);
    }

    #[test]
    fn equatorial_bonus_depends_on_height() {
        let five = grid(7, 5);
        assert_eq!(Mode::Equatorial.positional_bonus(0, 2, &five), 1.0);
        assert_eq!(Mode::Equatorial.positional_bonus(0, 3, &five), 0.0);

        let six = grid(7, 6);
        assert_eq!(Mode::Equatorial.positional_bonus(0, 2, &six), 1.0);
        assert_eq!(Mode::Equatorial.positional_bonus(0, 3, &six), 1.0);
    }

    #[test]
    fn seeding_modes_do_not_cluster() {
        assert!(Mode::Cluster.clusters_toward_targets());
        assert!(Mode::Polar.clusters_toward_targets());
        assert!(!Mode::Nocluster.clusters_toward_targets());
        assert!(!Mode::ForcedAdjacency.clusters_toward_targets());
        assert!(!Mode::ForcedRim.clusters_toward_targets());
        assert!(!Mode::PolarSeedingNorth.clusters_toward_targets());
        assert!(!Mode::PolarSeedingSouth.clusters_toward_targets());
    }

    #[test]
    fn polar_filter_keeps_two_row_bands() {
        let g = grid(3, 6);
        assert!(Mode::Polar.permits(0, 0, &g, &[], 1.0));
        assert!(Mode::Polar.permits(0, 1, &g, &[], 1.0));
        assert!(!Mode::Polar.permits(0, 2, &g, &[], 1.0));
        assert!(!Mode::Polar.permits(0, 3, &g, &[], 1.0));
        assert!(Mode::Polar.permits(0, 4, &g, &[], 1.0));
        assert!(Mode::Polar.permits(0, 5, &g, &[], 1.0));
    }

    #[test]
    fn strict_polar_filter_keeps_outermost_rows_only() {
        let g = grid(3, 5);
        assert!(Mode::StrictPolar.permits(0, 0, &g, &[], 1.0));
        assert!(!Mode::StrictPolar.permits(0, 1, &g, &[], 1.0));
        assert!(Mode::StrictPolar.permits(0, 4, &g, &[], 1.0));
    }

    #[test]
    fn equatorial_filter_rejects_unsupported_heights() {
        let g = grid(3, 4);
        assert!(!Mode::Equatorial.permits(0, 2, &g, &[], 1.0));

        let six = grid(3, 6);
        assert!(Mode::Equatorial.permits(0, 2, &six, &[], 1.0));
        assert!(Mode::Equatorial.permits(0, 3, &six, &[], 1.0));
        assert!(!Mode::Equatorial.permits(0, 1, &six, &[], 1.0));
    }

    #[test]
    fn forced_modes_enforce_weight_thresholds() {
        let g = grid(3, 3);
        assert!(!Mode::ForcedAdjacency.permits(1, 1, &g, &[], 1.5));
        assert!(Mode::ForcedAdjacency.permits(1, 1, &g, &[], 2.0));
        assert!(!Mode::ForcedRim.permits(1, 1, &g, &[], 1.0));
        assert!(Mode::ForcedRim.permits(1, 1, &g, &[], 1.5));
    }

    #[test]
    fn right_requires_matching_left_neighbor() {
        let mut g = grid(3, 3);
        g.set(0, 1, 55);
        assert!(Mode::Right.permits(1, 1, &g, &[55], 1.0));
        assert!(!Mode::Right.permits(2, 1, &g, &[55], 1.0));
        // No adjacent type configured means nothing can match.
        assert!(!Mode::Right.permits(1, 1, &g, &[], 1.0));
        // The leftmost column has no left neighbor.
        assert!(!Mode::Right.permits(0, 1, &g, &[55], 1.0));
    }

    #[test]
    fn below_requires_matching_top_neighbor() {
        let mut g = grid(3, 3);
        g.set(1, 0, 55);
        assert!(Mode::Below.permits(1, 1, &g, &[55], 1.0));
        assert!(!Mode::Below.permits(2, 1, &g, &[55], 1.0));
        assert!(!Mode::Below.permits(1, 0, &g, &[55], 1.0));
    }

    #[test]
    fn crater_seeding_avoids_last_row_and_column() {
        let g = grid(4, 3);
        assert!(Mode::CraterSeeding.permits(0, 0, &g, &[], 1.0));
        assert!(!Mode::CraterSeeding.permits(3, 0, &g, &[], 1.0));
        assert!(!Mode::CraterSeeding.permits(0, 2, &g, &[], 1.0));
    }

    #[test]
    fn orbit_modes_pin_their_rows() {
        let g = grid(5, 2);
        assert!(Mode::UpperOrbit.permits(0, 0, &g, &[], 1.0));
        assert!(!Mode::UpperOrbit.permits(0, 1, &g, &[], 1.0));
        assert!(Mode::LowerOrbit.permits(0, 1, &g, &[], 1.0));
        assert!(!Mode::LowerOrbit.permits(0, 0, &g, &[], 1.0));
    }

    #[test]
    fn tidal_seeding_pins_the_first_column() {
        let g = grid(5, 3);
        assert!(Mode::TidalSeeding.permits(0, 2, &g, &[], 1.0));
        assert!(!Mode::TidalSeeding.permits(1, 2, &g, &[], 1.0));
    }
}
