//! Colony generation: composes grids, phases and bonus rolls into one
//! flat field sequence per planet.
use rand::Rng;
use tracing::{debug, info};

use crate::error::Result;
use crate::generator::catalog::{DefinitionCatalog, PlanetTypeId};
use crate::surface::{apply_phase, FieldId, Phase, SurfaceGrid};

pub mod bonus;
pub mod catalog;
pub mod coldata;

/// Height of the orbit and underground bands.
const BAND_HEIGHT: usize = 2;

/// A generated colony: display name, surface dimensions, band flags and the
/// flat field sequence in orbit → surface → underground order, each region
/// emitted row-major.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct GeneratedColony {
    pub name: String,
    /// Line-wrap hint for consumers rendering the sequence.
    pub surface_width: usize,
    pub surface_height: usize,
    pub has_orbit: bool,
    pub has_underground: bool,
    pub fields: Vec<FieldId>,
}

impl GeneratedColony {
    /// Field count the sequence must have for these dimensions and bands.
    pub fn expected_field_count(&self) -> usize {
        let mut height = self.surface_height;
        if self.has_orbit {
            height += BAND_HEIGHT;
        }
        if self.has_underground {
            height += BAND_HEIGHT;
        }
        self.surface_width * height
    }
}

/// Generates colony surfaces from a catalog of planet class definitions.
pub struct ColonyGenerator {
    catalog: DefinitionCatalog,
}

impl ColonyGenerator {
    /// Creates a generator backed by `catalog`.
    pub fn new(catalog: DefinitionCatalog) -> Self {
        Self { catalog }
    }

    /// Creates a generator backed by the built-in planet classes.
    pub fn with_builtin_catalog() -> Self {
        Self::new(DefinitionCatalog::builtin())
    }

    /// All planet type ids this generator can handle, ascending.
    pub fn supported_planet_types(&self) -> impl Iterator<Item = PlanetTypeId> + '_ {
        self.catalog.ids()
    }

    /// Generates one colony for `planet_type_id`.
    ///
    /// `bonus_budget` caps the weighted bonus rolls; surfaces narrower or
    /// wider than 10 fields get one guaranteed bonus fewer. Fails with
    /// [`crate::error::Error::DefinitionNotFound`] for unknown ids and
    /// [`crate::error::Error::DefinitionInvalid`] for malformed definitions.
    pub fn generate<R: Rng>(
        &self,
        planet_type_id: PlanetTypeId,
        bonus_budget: i32,
        rng: &mut R,
    ) -> Result<GeneratedColony> {
        let definition = self.catalog.get(planet_type_id)?;
        definition.validate(planet_type_id)?;

        let budget = effective_bonus_budget(definition.width, bonus_budget);
        let bonus_phases = bonus::roll_bonus_phases(definition.width, budget, rng);
        debug!(
            planet_type_id,
            budget,
            bonus_phases = bonus_phases.len(),
            "generating colony"
        );

        let surface = run_region(
            definition.width,
            definition.height,
            definition.surface_base_field,
            &definition.surface_phases,
            &bonus_phases,
            rng,
        );
        let orbit = definition.has_orbit.then(|| {
            run_region(
                definition.width,
                BAND_HEIGHT,
                definition.orbit_base_field,
                &definition.orbit_phases,
                &[],
                rng,
            )
        });
        let underground = definition.has_underground.then(|| {
            run_region(
                definition.width,
                BAND_HEIGHT,
                definition.underground_base_field,
                &definition.underground_phases,
                &[],
                rng,
            )
        });

        let colony = GeneratedColony {
            name: definition.name.clone(),
            surface_width: definition.width,
            surface_height: definition.height,
            has_orbit: definition.has_orbit,
            has_underground: definition.has_underground,
            fields: combine(orbit.as_ref(), &surface, underground.as_ref()),
        };
        debug_assert_eq!(colony.fields.len(), colony.expected_field_count());
        info!(
            planet_type_id,
            name = %colony.name,
            fields = colony.fields.len(),
            "generated colony"
        );

        Ok(colony)
    }

    /// Read access to the backing catalog.
    pub fn catalog(&self) -> &DefinitionCatalog {
        &self.catalog
    }
}

/// Surfaces that deviate from the standard width of 10 get one guaranteed
/// bonus fewer.
fn effective_bonus_budget(width: usize, requested: i32) -> i32 {
    if width != 10 {
        requested - 1
    } else {
        requested
    }
}

/// Initializes one region grid and runs its phase recipe, then any bonus
/// phases, in order.
fn run_region<R: Rng>(
    width: usize,
    height: usize,
    base_field: FieldId,
    phases: &[Phase],
    bonus_phases: &[Phase],
    rng: &mut R,
) -> SurfaceGrid {
    let mut grid = SurfaceGrid::new(width, height, base_field);
    for phase in phases.iter().chain(bonus_phases) {
        apply_phase(&mut grid, phase, rng);
    }
    grid
}

/// Concatenates the regions in fixed order: orbit rows first, then the
/// surface, then underground rows, each region row-major.
fn combine(
    orbit: Option<&SurfaceGrid>,
    surface: &SurfaceGrid,
    underground: Option<&SurfaceGrid>,
) -> Vec<FieldId> {
    let mut fields = Vec::new();
    if let Some(orbit) = orbit {
        fields.extend(orbit.row_major());
    }
    fields.extend(surface.row_major());
    if let Some(underground) = underground {
        fields.extend(underground.row_major());
    }
    fields
}
