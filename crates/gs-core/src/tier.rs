use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Rarity tier of an item, from most to least common.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemTier {
    /// Everyday finds.
    Common,
    /// Slightly better than common. Eligible for the Titan Forge upgrade.
    Uncommon,
    /// Hard to come by.
    Rare,
    /// Very hard to come by.
    Epic,
    /// The rarest item tier.
    Legendary,
}

impl ItemTier {
    /// All tiers in ascending rarity.
    pub const ALL: [ItemTier; 5] = [
        ItemTier::Common,
        ItemTier::Uncommon,
        ItemTier::Rare,
        ItemTier::Epic,
        ItemTier::Legendary,
    ];

    /// The lowercase tier name used in tables and catalogs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    /// The tier name with a leading capital, for display text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for ItemTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownTier(s.trim().to_string()))
    }
}
