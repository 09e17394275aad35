//! Quest progression for Grindstone.
//!
//! A quest is an ordered list of narrative stages. Each call to
//! [`Quest::advance`] completes the next stage; completing the last stage
//! completes the quest in the same call. The [`QuestRegistry`] holds a
//! player's quests by id and keeps finished ones for history.

pub mod error;
pub mod quest;
pub mod registry;

pub use error::{QuestError, QuestResult};
pub use quest::{Advance, Quest, QuestStage, QuestStatus, StageLore};
pub use registry::QuestRegistry;
