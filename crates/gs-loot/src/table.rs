//! Weighted loot tables.
//!
//! Weights are relative: they need not sum to one, and the chance of a
//! category is its weight divided by the table total.

use std::collections::HashSet;

use gs_core::ItemTier;

use crate::category::RewardCategory;
use crate::error::{LootError, LootResult};

/// An ordered mapping from reward category to a positive relative weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardWeightTable {
    entries: Vec<(RewardCategory, f64)>,
}

impl RewardWeightTable {
    /// Build a table, rejecting empty tables, repeated categories, and
    /// weights that are not finite and positive.
    pub fn new(entries: impl IntoIterator<Item = (RewardCategory, f64)>) -> LootResult<Self> {
        let entries: Vec<_> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(LootError::EmptyWeightTable);
        }
        let mut seen = HashSet::new();
        for &(category, weight) in &entries {
            if !seen.insert(category) {
                return Err(LootError::DuplicateCategory(category.to_string()));
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(LootError::InvalidWeight {
                    category: category.to_string(),
                    weight,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Build a table from category names.
    pub fn from_named<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> LootResult<Self> {
        let parsed = entries
            .into_iter()
            .map(|(name, weight)| Ok((name.parse::<RewardCategory>()?, weight)))
            .collect::<LootResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// The standard grind table. Each item tier is half as likely as the
    /// one below it.
    pub fn grind() -> Self {
        Self {
            entries: vec![
                (RewardCategory::Nothing, 0.25),
                (RewardCategory::Resource, 0.5),
                (RewardCategory::Item(ItemTier::Common), 0.25),
                (RewardCategory::Item(ItemTier::Uncommon), 0.125),
                (RewardCategory::Item(ItemTier::Rare), 0.0625),
                (RewardCategory::Item(ItemTier::Epic), 0.03125),
                (RewardCategory::Item(ItemTier::Legendary), 0.015625),
                (RewardCategory::Pet, 0.015625),
            ],
        }
    }

    /// Categories and weights in table order.
    pub fn entries(&self) -> &[(RewardCategory, f64)] {
        &self.entries
    }

    /// Category at a table position.
    pub fn category_at(&self, index: usize) -> Option<RewardCategory> {
        self.entries.get(index).map(|(category, _)| *category)
    }

    /// Weights in table order.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, weight)| *weight)
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.weights().sum()
    }

    /// Normalized chance of rolling `category`, or 0 if it is not in the table.
    pub fn probability(&self, category: RewardCategory) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0.0, |(_, weight)| weight / self.total_weight())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RewardWeightTable {
    fn default() -> Self {
        Self::grind()
    }
}
