//! Static content for Grindstone.
//!
//! Item tiers and the items that drop in each, the resource kinds awarded
//! by grind sessions and the skill lineage each belongs to, and quest
//! definitions. A [`Catalog`] bundles them and is loaded once at startup,
//! either from the built-in demo content or from JSON.

/// Catalog bundling items and quest definitions, with loading.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Items and the per-tier item catalog.
pub mod item;
/// Quest definitions (static stage and lore text).
pub mod quest;
/// Resource kinds, their tiers, and skill lineages.
pub mod resource;
/// Item rarity tiers.
pub mod tier;

/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, ItemCatalog};
/// Re-export quest definitions.
pub use quest::QuestDefinition;
/// Re-export resource types.
pub use resource::{ResourceKind, ResourceTier, Skill};
/// Re-export the item tier.
pub use tier::ItemTier;
