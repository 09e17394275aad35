use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::tier::ItemTier;

/// A named item that can be found in a tier pool.
///
/// The effect is descriptive text only; nothing in the engine interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// What the item would do when used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}

impl Item {
    /// Create an item without an effect.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect: None,
        }
    }

    /// Attach effect text.
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(effect) = &self.effect {
            write!(f, " ({effect})")?;
        }
        Ok(())
    }
}

/// Items available in each tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCatalog {
    pools: BTreeMap<ItemTier, Vec<Item>>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add items to a tier's pool.
    pub fn with_items(mut self, tier: ItemTier, items: impl IntoIterator<Item = Item>) -> Self {
        self.pools.entry(tier).or_default().extend(items);
        self
    }

    /// The items in a tier.
    ///
    /// Fails with [`CoreError::UnknownTier`] when the catalog has no pool
    /// for `tier`.
    pub fn pool(&self, tier: ItemTier) -> CoreResult<&[Item]> {
        self.pools
            .get(&tier)
            .map(Vec::as_slice)
            .ok_or_else(|| CoreError::UnknownTier(tier.to_string()))
    }

    /// Whether the catalog has a pool for `tier`.
    pub fn contains(&self, tier: ItemTier) -> bool {
        self.pools.contains_key(&tier)
    }

    /// Tiers present in the catalog, in ascending rarity.
    pub fn tiers(&self) -> impl Iterator<Item = ItemTier> + '_ {
        self.pools.keys().copied()
    }

    /// Total number of items across all tiers.
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject tiers that were declared without items.
    pub fn validate(&self) -> CoreResult<()> {
        match self.pools.iter().find(|(_, items)| items.is_empty()) {
            Some((tier, _)) => Err(CoreError::EmptyTier(tier.to_string())),
            None => Ok(()),
        }
    }
}
