//! Reward events produced by the engine.

use gs_core::{ItemTier, ResourceKind};
use serde::{Deserialize, Serialize};

use crate::category::RewardCategory;

/// One thing a grind session awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewardEvent {
    /// XP and gold, paid once for every session.
    Currency {
        /// Experience gained.
        xp: u32,
        /// Gold gained.
        gold: u32,
    },
    /// The loot roll came up empty.
    Nothing,
    /// A resource drop.
    Resource {
        /// Which resource.
        resource: ResourceKind,
        /// How many.
        amount: u32,
    },
    /// An unopened item of the given tier.
    Item {
        /// Item rarity.
        tier: ItemTier,
    },
    /// A pet.
    Pet {
        /// Pet name.
        name: String,
    },
}

impl RewardEvent {
    /// The loot table category this event resolved from.
    ///
    /// Currency is not rolled on the table, so it has no category.
    pub fn category(&self) -> Option<RewardCategory> {
        match self {
            Self::Currency { .. } => None,
            Self::Nothing => Some(RewardCategory::Nothing),
            Self::Resource { .. } => Some(RewardCategory::Resource),
            Self::Item { tier } => Some(RewardCategory::Item(*tier)),
            Self::Pet { .. } => Some(RewardCategory::Pet),
        }
    }

    /// Whether this is the per-session currency payout.
    pub fn is_currency(&self) -> bool {
        matches!(self, Self::Currency { .. })
    }
}

impl std::fmt::Display for RewardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Currency { xp, gold } => write!(f, "🏅 +{xp} XP, +{gold} Gold"),
            Self::Nothing => write!(f, "Got nothing 😥"),
            Self::Resource { resource, amount } => write!(f, "🪓 +{amount} {resource}"),
            Self::Item { tier } => write!(f, "🎁 Found a {} item!", tier.label()),
            Self::Pet { name } => write!(f, "🐾 Found a pet: {name}!"),
        }
    }
}
