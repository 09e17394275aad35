//! Error types for quest tracking.

use thiserror::Error;

/// Result type for quest operations.
pub type QuestResult<T> = Result<T, QuestError>;

/// Errors raised by the quest registry.
#[derive(Debug, Error)]
pub enum QuestError {
    /// No quest with this id is registered.
    #[error("unknown quest: {0}")]
    UnknownQuest(String),

    /// A quest with this id is already registered.
    #[error("quest already unlocked: {0}")]
    DuplicateQuest(String),
}
