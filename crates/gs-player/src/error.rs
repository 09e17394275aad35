//! Error types for the player ledger.

use gs_core::ItemTier;

/// Result type for player operations.
pub type PlayerResult<T> = Result<T, PlayerError>;

/// Errors that can occur while updating a profile.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// There is no unopened item of this tier.
    #[error("no unopened {0} item")]
    NothingToOpen(ItemTier),

    /// Resolving the item failed.
    #[error(transparent)]
    Loot(#[from] gs_loot::LootError),
}
