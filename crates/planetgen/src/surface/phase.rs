//! Phase definitions: one rule set for a batch of weighted cell mutations.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::surface::mode::Mode;
use crate::surface::FieldId;

/// One step of a planet class recipe.
///
/// A phase either rewrites the whole grid deterministically
/// ([`Phase::full_surface`]) or performs `repetitions` weighted
/// pick-and-mutate rounds. Source/destination pairing is many-to-many: a pair
/// `(from, to)` means a cell currently holding `from` may become `to`, and the
/// same `from` may appear in several pairs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Phase {
    /// Positional/adjacency rule set for candidate scoring.
    pub mode: Mode,
    /// Number of pick-and-mutate rounds. Ignored for full-surface phases.
    pub repetitions: u32,
    /// Legal `(source, destination)` field transformations.
    pub transformations: Vec<(FieldId, FieldId)>,
    /// Field types that attract candidates when adjacent.
    pub adjacent: Vec<FieldId>,
    /// Field types that veto candidates when too close.
    pub no_adjacent: Vec<FieldId>,
    /// Maximum tolerated adjacency score against `no_adjacent` types.
    pub no_adjacent_limit: f64,
    /// Additive widening of the random weight range during selection.
    pub fragmentation: u32,
    /// Code category for full-surface rewrites; unused otherwise.
    pub category: FieldId,
}

impl Phase {
    /// Creates a phase with no transformations and no adjacency rules.
    pub fn new(mode: Mode, repetitions: u32) -> Self {
        Self {
            mode,
            repetitions,
            transformations: Vec::new(),
            adjacent: Vec::new(),
            no_adjacent: Vec::new(),
            no_adjacent_limit: 0.0,
            fragmentation: 0,
            category: 0,
        }
    }

    /// Creates a deterministic full-surface rewrite phase.
    ///
    /// Every cell `(x, y)` becomes `category * 100 + k` where `k` counts
    /// cells row-major starting at 1.
    pub fn full_surface(category: FieldId) -> Self {
        let mut phase = Self::new(Mode::FullSurface, 0);
        phase.category = category;
        phase
    }

    /// Adds one legal `(source, destination)` transformation pair.
    pub fn with_transformation(mut self, from: FieldId, to: FieldId) -> Self {
        self.transformations.push((from, to));
        self
    }

    /// Adds several transformation pairs at once.
    pub fn with_transformations(
        mut self,
        pairs: impl IntoIterator<Item = (FieldId, FieldId)>,
    ) -> Self {
        self.transformations.extend(pairs);
        self
    }

    /// Sets the attracting adjacency types.
    pub fn with_adjacent(mut self, adjacent: Vec<FieldId>) -> Self {
        self.adjacent = adjacent;
        self
    }

    /// Sets the vetoing adjacency types and the score they may not exceed.
    pub fn with_no_adjacent(mut self, no_adjacent: Vec<FieldId>, limit: f64) -> Self {
        self.no_adjacent = no_adjacent;
        self.no_adjacent_limit = limit;
        self
    }

    /// Sets the fragmentation applied during weighted selection.
    pub fn with_fragmentation(mut self, fragmentation: u32) -> Self {
        self.fragmentation = fragmentation;
        self
    }

    /// Destination codes a cell of `current` may legally become, preserving
    /// duplicates so repeated pairs keep their extra selection weight.
    pub fn targets_for(&self, current: FieldId) -> Vec<FieldId> {
        self.transformations
            .iter()
            .filter(|(from, _)| *from == current)
            .map(|(_, to)| *to)
            .collect()
    }

    /// Whether `current` appears as a source in any transformation pair.
    pub fn converts_from(&self, current: FieldId) -> bool {
        self.transformations.iter().any(|(from, _)| *from == current)
    }
}
