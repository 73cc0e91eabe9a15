//! Bonus field categories and the weighted rolls that grant them.
//!
//! A bonus destination code is the source code shifted two decimal digits
//! left plus a category suffix, so a `701` mountain with an ore vein becomes
//! `70112`. Each granted bonus turns into a single-shot nocluster phase with
//! one pre-drawn transformation pair and a high fragmentation, which places
//! the bonus on a near-uniformly chosen matching field.
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};
use tracing::debug;

use crate::surface::{FieldId, Mode, Phase};

/// Categories of bonus fields a colony surface can receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BonusCategory {
    Habitat,
    AnyResource,
    Ore,
    Deuterium,
    SolarEnergy,
    FlowEnergy,
    AnyEnergy,
    Quality,
    Super,
}

/// Suffix appended to a source code to form its bonus variant.
fn bonus_code(source: FieldId, suffix: FieldId) -> FieldId {
    source * 100 + suffix
}

const SUFFIX_QUALITY: FieldId = 1;
const SUFFIX_HABITAT: FieldId = 3;
const SUFFIX_HABITAT_ALT: FieldId = 4;
const SUFFIX_DEUTERIUM: FieldId = 11;
const SUFFIX_ORE: FieldId = 12;
const SUFFIX_DILITHIUM: FieldId = 21;
const SUFFIX_SOLAR: FieldId = 31;
const SUFFIX_FLOW: FieldId = 32;

impl BonusCategory {
    /// The category's static transformation table.
    ///
    /// Umbrella categories concatenate their member tables, so a category
    /// reachable through two members keeps proportional odds.
    pub fn transformations(self) -> Vec<(FieldId, FieldId)> {
        match self {
            BonusCategory::Habitat => {
                let mut pairs: Vec<_> = [101, 111, 112, 601, 602, 611]
                    .into_iter()
                    .map(|f| (f, bonus_code(f, SUFFIX_HABITAT)))
                    .collect();
                for f in [601, 611, 713, 715, 725] {
                    pairs.push((f, bonus_code(f, SUFFIX_HABITAT_ALT)));
                }
                pairs
            }
            BonusCategory::Ore => [701, 702, 703, 704, 705, 706]
                .into_iter()
                .map(|f| (f, bonus_code(f, SUFFIX_ORE)))
                .collect(),
            BonusCategory::Deuterium => [201, 210, 211, 221, 501, 511]
                .into_iter()
                .map(|f| (f, bonus_code(f, SUFFIX_DEUTERIUM)))
                .collect(),
            BonusCategory::AnyResource => {
                let mut pairs = BonusCategory::Ore.transformations();
                pairs.extend(BonusCategory::Deuterium.transformations());
                pairs
            }
            BonusCategory::SolarEnergy => [401, 402, 403, 404, 713]
                .into_iter()
                .map(|f| (f, bonus_code(f, SUFFIX_SOLAR)))
                .collect(),
            BonusCategory::FlowEnergy => [201, 221]
                .into_iter()
                .map(|f| (f, bonus_code(f, SUFFIX_FLOW)))
                .collect(),
            BonusCategory::AnyEnergy => {
                let mut pairs = BonusCategory::SolarEnergy.transformations();
                pairs.extend(BonusCategory::FlowEnergy.transformations());
                pairs
            }
            BonusCategory::Quality => [101, 111, 201, 401, 601, 701]
                .into_iter()
                .map(|f| (f, bonus_code(f, SUFFIX_QUALITY)))
                .collect(),
            BonusCategory::Super => [701, 702, 703, 704, 705, 706]
                .into_iter()
                .map(|f| (f, bonus_code(f, SUFFIX_DILITHIUM)))
                .collect(),
        }
    }

    /// Synthesizes the single-shot phase that places one bonus of this
    /// category: nocluster, one repetition, fragmentation 100 and exactly
    /// one transformation pair drawn uniformly from the table.
    pub fn roll_phase<R: Rng>(self, rng: &mut R) -> Phase {
        let table = self.transformations();
        let (from, to) = table[rng.random_range(0..table.len())];
        Phase::new(Mode::Nocluster, 1)
            .with_transformation(from, to)
            .with_fragmentation(100)
    }
}

/// Categories eligible for the per-colony bonus rolls.
const ROLLED_CATEGORIES: [BonusCategory; 5] = [
    BonusCategory::Super,
    BonusCategory::AnyResource,
    BonusCategory::AnyEnergy,
    BonusCategory::Habitat,
    BonusCategory::Quality,
];

/// Rolls the bonus phases for one colony surface.
///
/// The five rolled categories are shuffled, then each flips a 75% coin while
/// the budget still has room. A surface wider than 7 that rolled no super
/// bonus gets one extra 40% flip for a resource bonus; that flip checks the
/// remaining budget but does not debit it, so the realized bonus count can
/// exceed the budget by one. Observed behavior, kept as-is.
pub fn roll_bonus_phases<R: Rng>(width: usize, budget: i32, rng: &mut R) -> Vec<Phase> {
    roll_bonus_categories(width, budget, rng)
        .into_iter()
        .map(|category| category.roll_phase(rng))
        .collect()
}

/// The category rolls behind [roll_bonus_phases], in grant order.
pub(crate) fn roll_bonus_categories<R: Rng>(
    width: usize,
    budget: i32,
    rng: &mut R,
) -> Vec<BonusCategory> {
    let mut order = ROLLED_CATEGORIES;
    order.shuffle(rng);

    let mut consumed = 0;
    let mut granted = Vec::new();
    for category in order {
        if consumed < budget && rng.random_bool(0.75) {
            granted.push(category);
            consumed += 1;
        }
    }

    let rolled_super = granted.contains(&BonusCategory::Super);
    if !rolled_super && width > 7 && consumed < budget && rng.random_bool(0.4) {
        granted.push(BonusCategory::AnyResource);
    }

    debug!(?granted, consumed, budget, "rolled bonus categories");
    granted
}
