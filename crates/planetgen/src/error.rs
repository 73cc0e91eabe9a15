//! Error types and result alias for the crate.
//!
//! Generation can only fail while resolving a planet class definition: either
//! the requested id is unknown, or the definition itself is malformed. Running
//! out of mutation candidates during a phase is a normal termination of that
//! phase, not an error.
use thiserror::Error;

use crate::generator::catalog::PlanetTypeId;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("no planet class definition for type id {id}")]
    DefinitionNotFound { id: PlanetTypeId },

    #[error("invalid planet class definition for type id {id}: {reason}")]
    DefinitionInvalid { id: PlanetTypeId, reason: String },
}
