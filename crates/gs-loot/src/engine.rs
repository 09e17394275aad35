//! The grind reward engine.
//!
//! Each session pays currency, then rolls once on the weighted table and
//! resolves the rolled category into a concrete event. Draw order per
//! session is fixed (gold, category, then any sub-rolls) so a seeded RNG
//! always reproduces the same rewards.

use std::ops::RangeInclusive;

use gs_core::ResourceKind;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::category::RewardCategory;
use crate::error::LootResult;
use crate::event::RewardEvent;
use crate::table::RewardWeightTable;

/// XP paid for every completed session.
pub const SESSION_XP: u32 = 10;

/// Gold paid for every completed session.
pub const SESSION_GOLD: RangeInclusive<u32> = 1..=5;

/// Chance that a resource drop is a base material rather than a refined one.
pub const BASE_RESOURCE_CHANCE: f64 = 0.5;

/// Name given to pets until pet content exists.
pub const MYSTERY_PET: &str = "??Mystery Pet??";

/// Turns completed sessions into reward events.
///
/// Holds only the immutable weight table and its sampler, so one engine can
/// serve any number of pulls.
#[derive(Debug, Clone)]
pub struct RewardEngine {
    table: RewardWeightTable,
    sampler: WeightedIndex<f64>,
}

impl RewardEngine {
    /// Create an engine for a weight table.
    pub fn new(table: RewardWeightTable) -> LootResult<Self> {
        let sampler = WeightedIndex::new(table.weights())?;
        debug!(
            categories = table.len(),
            total_weight = table.total_weight(),
            "reward engine ready"
        );
        Ok(Self { table, sampler })
    }

    /// Create an engine for the standard grind table.
    pub fn grind() -> LootResult<Self> {
        Self::new(RewardWeightTable::grind())
    }

    /// The engine's weight table.
    pub fn table(&self) -> &RewardWeightTable {
        &self.table
    }

    /// Roll rewards for `sessions` completed sessions.
    ///
    /// Returns exactly two events per session: the currency payout followed
    /// by the resolved loot roll.
    pub fn pull(&self, sessions: usize, rng: &mut StdRng) -> Vec<RewardEvent> {
        let mut events = Vec::with_capacity(sessions * 2);
        for _ in 0..sessions {
            events.push(roll_currency(rng));
            let category = self.roll_category(rng);
            let event = resolve(category, rng);
            trace!(%category, %event, "session reward");
            events.push(event);
        }
        debug!(sessions, events = events.len(), "pulled grind rewards");
        events
    }

    /// Roll one category from the table.
    pub fn roll_category(&self, rng: &mut StdRng) -> RewardCategory {
        self.table.entries()[self.sampler.sample(rng)].0
    }
}

/// The fixed XP and a uniform gold amount.
pub fn roll_currency(rng: &mut StdRng) -> RewardEvent {
    RewardEvent::Currency {
        xp: SESSION_XP,
        gold: rng.random_range(SESSION_GOLD),
    }
}

/// Resolve a rolled category into its event.
pub fn resolve(category: RewardCategory, rng: &mut StdRng) -> RewardEvent {
    match category {
        RewardCategory::Nothing => RewardEvent::Nothing,
        RewardCategory::Resource => roll_resource(rng),
        RewardCategory::Item(tier) => RewardEvent::Item { tier },
        RewardCategory::Pet => RewardEvent::Pet {
            name: MYSTERY_PET.to_string(),
        },
    }
}

/// Pick a refined and a base kind, then a coin flip decides which one drops.
///
/// Base drops are larger than refined ones; see
/// [`gs_core::ResourceTier::amount_range`].
pub fn roll_resource(rng: &mut StdRng) -> RewardEvent {
    let refined = ResourceKind::REFINED[rng.random_range(0..ResourceKind::REFINED.len())];
    let base = ResourceKind::BASE[rng.random_range(0..ResourceKind::BASE.len())];
    let resource = if rng.random_bool(BASE_RESOURCE_CHANCE) {
        base
    } else {
        refined
    };
    RewardEvent::Resource {
        resource,
        amount: rng.random_range(resource.tier().amount_range()),
    }
}
