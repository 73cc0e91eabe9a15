//! Surface engine: grids, phase rules, candidate weighting, and mutation.
pub mod executor;
pub mod grid;
pub mod mode;
pub mod phase;
pub mod selection;
pub mod weighting;

pub use executor::apply_phase;
pub use grid::SurfaceGrid;
pub use mode::Mode;
pub use phase::Phase;
pub use selection::pick_weighted;
pub use weighting::{collect_candidates, Candidate};

/// Opaque field type code for one grid cell. The engine only ever compares
/// codes for equality; what a code renders as is the consumer's concern.
pub type FieldId = u32;
