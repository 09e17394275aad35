//! Reward distribution engine for Grindstone.
//!
//! Every completed grind session pays out a fixed amount of XP plus a little
//! gold, then rolls once on a weighted loot table. The rolled category is
//! resolved into a concrete [`RewardEvent`]: nothing, a resource drop, an
//! item of some tier, or a pet. Found items are resolved separately by
//! [`forge::pull_item`], where uncommon pulls may be upgraded by the
//! Titan Forge.
//!
//! The engine is pure: it only produces events. Applying them to a player
//! and presenting them is up to the caller.

pub mod category;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod forge;
pub mod session;
pub mod table;

pub use category::RewardCategory;
pub use config::LootConfig;
pub use engine::RewardEngine;
pub use error::{LootError, LootResult};
pub use event::RewardEvent;
pub use forge::{ItemPull, pull_item, pull_item_named, roll_item};
pub use session::LootSession;
pub use table::RewardWeightTable;
