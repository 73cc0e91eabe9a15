//! Built-in planet class definitions.
//!
//! Field code vocabulary shared with the bonus tables: 1xx grassland, 2xx
//! water, 4xx desert, 5xx ice, 6xx forest, 7xx mountains, 8xx underground
//! rock, 9xx orbit.
use crate::generator::catalog::{ColonyClassDefinition, DefinitionCatalog};
use crate::surface::{Mode, Phase};

/// Catalog of all built-in planet classes.
pub fn builtin_catalog() -> DefinitionCatalog {
    let mut catalog = DefinitionCatalog::new();
    catalog.insert(201, class_m_world());
    catalog.insert(405, tidally_locked_world());
    catalog.insert(407, barren_moon());
    catalog
}

/// Temperate ocean world: ice caps seeded at both poles, an equatorial
/// landmass with forest and mountains, beaches rimming the land.
fn class_m_world() -> ColonyClassDefinition {
    let mut def = ColonyClassDefinition::new("Class M world", 10, 6);
    def.has_orbit = true;
    def.has_underground = true;
    def.surface_base_field = 201;
    def.orbit_base_field = 900;
    def.underground_base_field = 802;

    def.surface_phases = vec![
        Phase::new(Mode::PolarSeedingNorth, 1)
            .with_transformation(201, 501)
            .with_fragmentation(2),
        Phase::new(Mode::PolarSeedingSouth, 1)
            .with_transformation(201, 501)
            .with_fragmentation(2),
        Phase::new(Mode::Polar, 8)
            .with_transformation(201, 501)
            .with_fragmentation(1),
        Phase::new(Mode::Equatorial, 7)
            .with_transformation(201, 101)
            .with_fragmentation(3),
        Phase::new(Mode::Cluster, 6)
            .with_transformation(101, 601)
            .with_fragmentation(2),
        Phase::new(Mode::Cluster, 4)
            .with_transformations([(101, 701), (101, 702)])
            .with_no_adjacent(vec![501], 0.0)
            .with_fragmentation(1),
        Phase::new(Mode::ForcedRim, 4)
            .with_transformation(201, 211)
            .with_adjacent(vec![101, 601])
            .with_fragmentation(1),
        Phase::new(Mode::ForcedAdjacency, 5)
            .with_transformation(201, 221)
            .with_adjacent(vec![201])
            .with_fragmentation(1),
    ];
    def.orbit_phases = vec![
        Phase::new(Mode::UpperOrbit, 1)
            .with_transformation(900, 903)
            .with_fragmentation(5),
        Phase::new(Mode::LowerOrbit, 2)
            .with_transformation(900, 905)
            .with_fragmentation(5),
    ];
    def.underground_phases = vec![
        Phase::new(Mode::Nocluster, 4)
            .with_transformation(802, 811)
            .with_no_adjacent(vec![811], 0.0)
            .with_fragmentation(10),
    ];

    def
}

/// Desert world locked to its star: a hot seam on the star-facing column,
/// thin frost lines at both poles and an impact crater stamped away from
/// the trailing edges.
fn tidally_locked_world() -> ColonyClassDefinition {
    let mut def = ColonyClassDefinition::new("Tidally locked world", 7, 5);
    def.has_orbit = true;
    def.surface_base_field = 401;
    def.orbit_base_field = 900;
    def.underground_base_field = 802;

    def.surface_phases = vec![
        Phase::new(Mode::TidalSeeding, 2)
            .with_transformation(401, 402)
            .with_fragmentation(1),
        Phase::new(Mode::Cluster, 5)
            .with_transformation(401, 402)
            .with_fragmentation(1),
        Phase::new(Mode::StrictPolar, 2)
            .with_transformation(401, 501)
            .with_fragmentation(1),
        Phase::new(Mode::CraterSeeding, 1)
            .with_transformation(401, 421)
            .with_no_adjacent(vec![421], 0.0)
            .with_fragmentation(30),
        Phase::new(Mode::Right, 1)
            .with_transformation(401, 422)
            .with_adjacent(vec![421]),
        Phase::new(Mode::Below, 1)
            .with_transformation(401, 423)
            .with_adjacent(vec![421]),
        Phase::new(Mode::TopLeft, 1)
            .with_transformation(401, 404)
            .with_fragmentation(1),
    ];
    def.orbit_phases = vec![
        Phase::new(Mode::UpperOrbit, 1)
            .with_transformation(900, 903)
            .with_fragmentation(5),
        Phase::new(Mode::LowerOrbit, 1)
            .with_transformation(900, 904)
            .with_fragmentation(5),
    ];

    def
}

/// Featureless moon, kept byte-for-byte compatible with the classic class
/// 407 data: no phases, orbit present, no underground.
fn barren_moon() -> ColonyClassDefinition {
    let mut def = ColonyClassDefinition::new("Barren moon", 7, 5);
    def.has_orbit = true;
    def.surface_base_field = 1000;
    def.orbit_base_field = 900;
    def.underground_base_field = 802;
    def
}
