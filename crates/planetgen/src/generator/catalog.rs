//! Planet class definitions and the catalog that resolves them by type id.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::surface::{FieldId, Mode, Phase};

/// Identifier of a planet class definition.
pub type PlanetTypeId = u16;

/// Everything needed to generate one planet class: dimensions, per-region
/// base fields, per-region phase recipes and the region presence flags.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ColonyClassDefinition {
    /// Display name of the planet class.
    pub name: String,
    /// Colony surface width; orbit and underground share it.
    pub width: usize,
    /// Colony surface height. Orbit and underground are always 2 rows.
    pub height: usize,
    pub has_orbit: bool,
    pub has_underground: bool,
    pub surface_base_field: FieldId,
    pub orbit_base_field: FieldId,
    pub underground_base_field: FieldId,
    pub surface_phases: Vec<Phase>,
    pub orbit_phases: Vec<Phase>,
    pub underground_phases: Vec<Phase>,
}

impl ColonyClassDefinition {
    pub fn new(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            has_orbit: false,
            has_underground: false,
            surface_base_field: 0,
            orbit_base_field: 0,
            underground_base_field: 0,
            surface_phases: Vec::new(),
            orbit_phases: Vec::new(),
            underground_phases: Vec::new(),
        }
    }

    /// Checks the definition for structural problems, reporting them against
    /// the id it was looked up under.
    pub fn validate(&self, id: PlanetTypeId) -> Result<()> {
        let invalid = |reason: &str| Error::DefinitionInvalid {
            id,
            reason: reason.to_owned(),
        };

        if self.name.is_empty() {
            return Err(invalid("display name must not be empty"));
        }
        if self.width == 0 {
            return Err(invalid("surface width must be > 0"));
        }
        if self.height == 0 {
            return Err(invalid("surface height must be > 0"));
        }

        let regions = [
            ("surface", &self.surface_phases),
            ("orbit", &self.orbit_phases),
            ("underground", &self.underground_phases),
        ];
        for (region, phases) in regions {
            for (index, phase) in phases.iter().enumerate() {
                if phase.mode == Mode::FullSurface {
                    if phase.category == 0 {
                        return Err(invalid(&format!(
                            "{region} phase {index}: full-surface phase needs a category"
                        )));
                    }
                } else if phase.transformations.is_empty() {
                    return Err(invalid(&format!(
                        "{region} phase {index}: no transformation pairs"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// In-memory registry of planet class definitions, keyed by type id.
#[derive(Clone, Debug, Default)]
pub struct DefinitionCatalog {
    classes: BTreeMap<PlanetTypeId, ColonyClassDefinition>,
}

impl DefinitionCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the catalog of built-in planet classes.
    pub fn builtin() -> Self {
        crate::generator::coldata::builtin_catalog()
    }

    /// Registers or replaces a definition under `id`.
    pub fn insert(&mut self, id: PlanetTypeId, definition: ColonyClassDefinition) -> &mut Self {
        self.classes.insert(id, definition);
        self
    }

    /// Resolves the definition for `id`.
    pub fn get(&self, id: PlanetTypeId) -> Result<&ColonyClassDefinition> {
        self.classes
            .get(&id)
            .ok_or(Error::DefinitionNotFound { id })
    }

    /// All known planet type ids in ascending order. The iterator is lazy
    /// and can be restarted by calling this again.
    pub fn ids(&self) -> impl Iterator<Item = PlanetTypeId> + '_ {
        self.classes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
