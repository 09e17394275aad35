//! Error types for the reward engine.

use gs_core::CoreError;

/// Result type for loot operations.
pub type LootResult<T> = Result<T, LootError>;

/// Errors that can occur while building a loot table or pulling items.
#[derive(Debug, thiserror::Error)]
pub enum LootError {
    /// The requested tier has no pool in the item catalog.
    #[error("unknown tier: {0}")]
    UnknownTier(String),

    /// A tier pool exists but holds no items.
    #[error("tier '{0}' has no items")]
    EmptyTier(String),

    /// A weight table named a category outside the closed set.
    #[error("unknown reward category: {0}")]
    UnknownCategory(String),

    /// A category was listed more than once in a weight table.
    #[error("duplicate reward category: {0}")]
    DuplicateCategory(String),

    /// A weight was zero, negative, or not finite.
    #[error("invalid weight {weight} for category '{category}'")]
    InvalidWeight {
        /// The offending category.
        category: String,
        /// The rejected weight.
        weight: f64,
    },

    /// The weight table has no categories.
    #[error("weight table is empty")]
    EmptyWeightTable,

    /// The weights could not be turned into a sampler.
    #[error("weight table rejected: {0}")]
    Sampler(#[from] rand::distr::weighted::Error),

    /// Content error from the catalog.
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for LootError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownTier(tier) => Self::UnknownTier(tier),
            CoreError::EmptyTier(tier) => Self::EmptyTier(tier),
            other => Self::Core(other),
        }
    }
}
