#![forbid(unsafe_code)]
//! planetgen: procedural planet colony surfaces through weighted phase-based
//! field mutation.
//!
//! Modules:
//! - surface: grids, phase rules, candidate weighting, weighted selection and
//!   phase execution
//! - generator: planet class catalog, bonus field rolls and the colony
//!   orchestrator
//!
//! A colony is generated by loading a planet class definition, running its
//! phase recipe per region (orbit, surface, underground) and concatenating
//! the regions into one flat field sequence. All randomness flows through an
//! injected [rand::Rng], so a seeded generator replays a colony exactly.
pub mod error;
pub mod generator;
pub mod surface;

/// Convenient re-exports for common types. Import with `use planetgen::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::generator::bonus::BonusCategory;
    pub use crate::generator::catalog::{
        ColonyClassDefinition, DefinitionCatalog, PlanetTypeId,
    };
    pub use crate::generator::{ColonyGenerator, GeneratedColony};
    pub use crate::surface::{
        apply_phase, collect_candidates, pick_weighted, Candidate, FieldId, Mode, Phase,
        SurfaceGrid,
    };
}
