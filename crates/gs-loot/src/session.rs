//! A seeded loot session.
//!
//! `LootSession` owns the engine and a single RNG stream so that session
//! rewards and item pulls draw from one reproducible sequence.

use gs_core::{Item, ItemCatalog, ItemTier};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::LootConfig;
use crate::engine::RewardEngine;
use crate::error::LootResult;
use crate::event::RewardEvent;
use crate::forge::{ItemPull, roll_item};

/// Reward engine plus the RNG stream it draws from.
#[derive(Debug, Clone)]
pub struct LootSession {
    engine: RewardEngine,
    rng: StdRng,
    sessions_pulled: u64,
}

impl LootSession {
    /// Create a session from a configuration.
    pub fn new(config: LootConfig) -> LootResult<Self> {
        Ok(Self {
            engine: RewardEngine::new(config.weights)?,
            rng: StdRng::seed_from_u64(config.seed),
            sessions_pulled: 0,
        })
    }

    /// The reward engine.
    pub fn engine(&self) -> &RewardEngine {
        &self.engine
    }

    /// Total sessions rewarded so far.
    pub fn sessions_pulled(&self) -> u64 {
        self.sessions_pulled
    }

    /// The session's RNG, for callers that resolve rewards themselves.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Reward `sessions` completed sessions.
    pub fn pull(&mut self, sessions: usize) -> Vec<RewardEvent> {
        self.sessions_pulled += sessions as u64;
        self.engine.pull(sessions, &mut self.rng)
    }

    /// Pull an item from `tier`.
    pub fn pull_item(&mut self, catalog: &ItemCatalog, tier: ItemTier) -> LootResult<Item> {
        self.roll_item(catalog, tier).map(|pull| pull.item)
    }

    /// Pull an item from `tier`, with the Titan Forge details.
    pub fn roll_item(&mut self, catalog: &ItemCatalog, tier: ItemTier) -> LootResult<ItemPull> {
        roll_item(catalog, tier, &mut self.rng)
    }
}
