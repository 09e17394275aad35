//! A player's currency, resources, and belongings.

use std::collections::BTreeMap;

use gs_core::{Item, ItemCatalog, ItemTier, ResourceKind, Skill};
use gs_loot::{ItemPull, RewardEvent, roll_item};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PlayerError, PlayerResult};

/// XP needed per level.
pub const XP_PER_LEVEL: u32 = 100;

/// A level change caused by applying rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level before.
    pub from: u32,
    /// Level after.
    pub to: u32,
}

/// Everything a player has earned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Total experience.
    pub xp: u32,
    /// Gold on hand.
    pub gold: u32,
    /// Resource holdings.
    pub resources: BTreeMap<ResourceKind, u32>,
    /// Found items not yet opened, per tier.
    pub unopened: BTreeMap<ItemTier, u32>,
    /// Opened items.
    pub inventory: Vec<Item>,
    /// Pets found.
    pub pets: Vec<String>,
}

impl Profile {
    /// An empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.xp / XP_PER_LEVEL + 1
    }

    /// How much of a resource the player holds.
    pub fn resource(&self, kind: ResourceKind) -> u32 {
        self.resources.get(&kind).copied().unwrap_or(0)
    }

    /// Holdings that belong to one skill lineage.
    pub fn resources_for(&self, skill: Skill) -> BTreeMap<ResourceKind, u32> {
        self.resources
            .iter()
            .filter(|(kind, _)| kind.skill() == skill)
            .map(|(kind, amount)| (*kind, *amount))
            .collect()
    }

    /// Number of unopened items of a tier.
    pub fn unopened(&self, tier: ItemTier) -> u32 {
        self.unopened.get(&tier).copied().unwrap_or(0)
    }

    /// Apply one reward. Returns the level change, if any.
    pub fn apply(&mut self, event: &RewardEvent) -> Option<LevelUp> {
        let before = self.level();
        match event {
            RewardEvent::Currency { xp, gold } => {
                self.xp = self.xp.saturating_add(*xp);
                self.gold = self.gold.saturating_add(*gold);
            }
            RewardEvent::Nothing => {}
            RewardEvent::Resource { resource, amount } => {
                let held = self.resources.entry(*resource).or_default();
                *held = held.saturating_add(*amount);
            }
            RewardEvent::Item { tier } => {
                let held = self.unopened.entry(*tier).or_default();
                *held = held.saturating_add(1);
            }
            RewardEvent::Pet { name } => self.pets.push(name.clone()),
        }

        let after = self.level();
        (after > before).then(|| {
            info!(from = before, to = after, "level up");
            LevelUp {
                from: before,
                to: after,
            }
        })
    }

    /// Apply a batch of rewards in order. Returns the overall level change.
    pub fn apply_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a RewardEvent>,
    ) -> Option<LevelUp> {
        let before = self.level();
        for event in events {
            self.apply(event);
        }
        let after = self.level();
        (after > before).then_some(LevelUp {
            from: before,
            to: after,
        })
    }

    /// Open one unopened item of `tier` and keep what comes out.
    ///
    /// Uncommon items may be upgraded by the Titan Forge. The unopened item
    /// is only consumed when the pull succeeds.
    pub fn open(
        &mut self,
        tier: ItemTier,
        catalog: &ItemCatalog,
        rng: &mut StdRng,
    ) -> PlayerResult<ItemPull> {
        let count = self.unopened(tier);
        if count == 0 {
            return Err(PlayerError::NothingToOpen(tier));
        }
        let pull = roll_item(catalog, tier, rng)?;
        if count == 1 {
            self.unopened.remove(&tier);
        } else {
            self.unopened.insert(tier, count - 1);
        }
        self.inventory.push(pull.item.clone());
        Ok(pull)
    }
}
