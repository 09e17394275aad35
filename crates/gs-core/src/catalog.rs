//! The content catalog loaded at startup.
//!
//! A catalog is immutable once loaded. Engines borrow it; per-player state
//! (quest progress, inventories) is created from it and never written back.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemCatalog};
use crate::quest::QuestDefinition;
use crate::tier::ItemTier;

/// All static content: items per tier and quest definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Items available in each tier.
    #[serde(default)]
    pub items: ItemCatalog,
    /// Quest definitions, in unlock order.
    #[serde(default)]
    pub quests: Vec<QuestDefinition>,
}

impl Catalog {
    /// Build a catalog and check it.
    pub fn new(items: ItemCatalog, quests: Vec<QuestDefinition>) -> CoreResult<Self> {
        let catalog = Self { items, quests };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON.
    ///
    /// ```text
    /// {
    ///   "items": { "common": [{ "name": "...", "description": "...", "effect": "..." }] },
    ///   "quests": [{ "id": "...", "title": "...", "stages": ["..."], "epilogue": "..." }]
    /// }
    /// ```
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        debug!(
            items = catalog.items.len(),
            quests = catalog.quests.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Read and parse a catalog JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Look up a quest definition by id.
    pub fn quest(&self, id: &str) -> Option<&QuestDefinition> {
        self.quests.iter().find(|q| q.id == id)
    }

    /// Reject empty item tiers and duplicate quest ids.
    pub fn validate(&self) -> CoreResult<()> {
        self.items.validate()?;
        let mut seen = HashSet::new();
        for quest in &self.quests {
            if !seen.insert(quest.id.as_str()) {
                return Err(CoreError::DuplicateQuest(quest.id.clone()));
            }
        }
        Ok(())
    }

    /// The built-in demo content.
    pub fn builtin() -> Self {
        let items = ItemCatalog::new()
            .with_items(
                ItemTier::Common,
                [
                    Item::new(
                        "Worn Training Sword",
                        "A dented but dependable blade, once used by squires-in-training.",
                    )
                    .with_effect("1/3 chance of double XP on a grind, 2 charges then breaks"),
                    Item::new(
                        "Gatherer's Satchel",
                        "A threadbare pouch with room for a few herbs, logs, or copper ore.",
                    )
                    .with_effect("10% chance to double resource gain"),
                ],
            )
            .with_items(
                ItemTier::Uncommon,
                [
                    Item::new(
                        "Card Deck (Gambler's Potential)",
                        "Who can risk more than he who has nothing to lose?",
                    )
                    .with_effect(
                        "Gamble this card over 4 grind sessions: 2/3 chance to upgrade, \
                         1/3 chance to be destroyed",
                    ),
                    Item::new("Basic Recipe", "A basic crafting recipe.").with_effect(
                        "Learn a basic recipe from one of the crafting schools. Gain 20 XP.",
                    ),
                ],
            )
            .with_items(
                ItemTier::Rare,
                [Item::new(
                    "Chronomancer's Sandglass",
                    "This cracked hourglass once stretched seconds into focus-filled eternities.",
                )
                .with_effect("A special 45 minute grind with a much higher rare drop chance")],
            )
            .with_items(
                ItemTier::Epic,
                [Item::new("Sealed Lockbox", "Heavy, and something inside rattles.")],
            );

        let quests = vec![
            QuestDefinition::new("first_steps", "First Steps")
                .with_intro("The old forge master eyes your calloused hands and nods.")
                .with_stage("You sweep the forge floor and stack the kindling.")
                .with_stage("You hammer your first copper ingot flat.")
                .with_stage("You temper a blade that does not shatter.")
                .with_epilogue("The forge master hands you a key to the Titan Forge."),
        ];

        Self { items, quests }
    }
}
