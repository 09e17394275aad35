//! Configuration for a loot session.

use crate::table::RewardWeightTable;

/// Configuration for a loot session.
#[derive(Debug, Clone)]
pub struct LootConfig {
    /// RNG seed for reproducible pulls.
    pub seed: u64,
    /// Weight table for the per-session loot roll.
    pub weights: RewardWeightTable,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            weights: RewardWeightTable::grind(),
        }
    }
}

impl LootConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the weight table.
    pub fn with_weights(mut self, weights: RewardWeightTable) -> Self {
        self.weights = weights;
        self
    }
}
