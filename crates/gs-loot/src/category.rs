//! The closed set of loot table categories.

use std::str::FromStr;

use gs_core::ItemTier;
use serde::{Deserialize, Serialize};

use crate::error::LootError;

/// What a single loot roll lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RewardCategory {
    /// No bonus this session.
    Nothing,
    /// A base or refined resource drop.
    Resource,
    /// An item of the given tier.
    Item(ItemTier),
    /// A pet.
    Pet,
}

impl RewardCategory {
    /// Every category, in the order of the default grind table.
    pub const ALL: [RewardCategory; 8] = [
        Self::Nothing,
        Self::Resource,
        Self::Item(ItemTier::Common),
        Self::Item(ItemTier::Uncommon),
        Self::Item(ItemTier::Rare),
        Self::Item(ItemTier::Epic),
        Self::Item(ItemTier::Legendary),
        Self::Pet,
    ];

    /// The category name used in weight tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Resource => "resource",
            Self::Item(tier) => tier.as_str(),
            Self::Pet => "pet",
        }
    }
}

impl std::fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RewardCategory {
    type Err = LootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| LootError::UnknownCategory(s.trim().to_string()))
    }
}

impl TryFrom<String> for RewardCategory {
    type Error = LootError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RewardCategory> for String {
    fn from(category: RewardCategory) -> Self {
        category.as_str().to_string()
    }
}
