//! A player's quests, keyed by id.
//!
//! Quests are added when the registry is built from the catalog or when
//! content unlocks them later. They are never removed: finished quests stay
//! for history.

use std::collections::BTreeMap;

use gs_core::{Catalog, QuestDefinition};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QuestError, QuestResult};
use crate::quest::{Advance, Quest};

/// The player's quests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestRegistry {
    quests: BTreeMap<String, Quest>,
}

impl QuestRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a fresh instance of every catalog quest.
    pub fn from_catalog(catalog: &Catalog) -> QuestResult<Self> {
        let mut registry = Self::new();
        for def in &catalog.quests {
            registry.unlock(def)?;
        }
        Ok(registry)
    }

    /// Add a fresh instance of a quest.
    pub fn unlock(&mut self, def: &QuestDefinition) -> QuestResult<&Quest> {
        self.insert(Quest::from_definition(def))
    }

    /// Add a quest instance.
    pub fn insert(&mut self, quest: Quest) -> QuestResult<&Quest> {
        if self.quests.contains_key(quest.id()) {
            return Err(QuestError::DuplicateQuest(quest.id().to_string()));
        }
        debug!(quest = %quest.id(), stages = quest.stages().len(), "quest unlocked");
        let id = quest.id().to_string();
        Ok(self.quests.entry(id).or_insert(quest))
    }

    /// Look up a quest.
    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.get(id)
    }

    /// Advance a quest by id.
    pub fn advance(&mut self, id: &str) -> QuestResult<Advance> {
        self.quests
            .get_mut(id)
            .map(Quest::advance)
            .ok_or_else(|| QuestError::UnknownQuest(id.to_string()))
    }

    /// Quests still in progress or not yet started.
    pub fn active(&self) -> Vec<&Quest> {
        self.quests.values().filter(|q| !q.is_completed()).collect()
    }

    /// Finished quests.
    pub fn completed(&self) -> Vec<&Quest> {
        self.quests.values().filter(|q| q.is_completed()).collect()
    }

    /// All quests, ordered by id.
    pub fn all(&self) -> impl Iterator<Item = &Quest> {
        self.quests.values()
    }

    /// Number of quests.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Whether no quests are registered.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(id: &str, stages: usize) -> QuestDefinition {
        (0..stages).fold(QuestDefinition::new(id, id), |d, i| {
            d.with_stage(format!("stage {i}"))
        })
    }

    #[test]
    fn from_builtin_catalog() {
        let registry = QuestRegistry::from_catalog(&Catalog::builtin()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active().len(), 1);
        assert!(registry.completed().is_empty());
    }

    #[test]
    fn unlock_and_advance() {
        let mut registry = QuestRegistry::new();
        registry.unlock(&def("a", 2)).unwrap();
        assert!(matches!(registry.advance("a").unwrap(), Advance::Stage(_)));
        assert!(registry.advance("a").unwrap().finished_quest());
        assert_eq!(registry.advance("a").unwrap(), Advance::AlreadyCompleted);
        assert_eq!(registry.completed().len(), 1);
        assert!(registry.active().is_empty());
    }

    #[test]
    fn duplicate_unlock_rejected() {
        let mut registry = QuestRegistry::new();
        registry.unlock(&def("a", 1)).unwrap();
        registry.advance("a").unwrap();
        let err = registry.unlock(&def("a", 3)).unwrap_err();
        assert!(matches!(err, QuestError::DuplicateQuest(ref id) if id == "a"));
        // progress on the existing quest is untouched
        assert!(registry.get("a").unwrap().is_completed());
    }

    #[test]
    fn unknown_quest() {
        let mut registry = QuestRegistry::new();
        let err = registry.advance("ghost").unwrap_err();
        assert!(matches!(err, QuestError::UnknownQuest(ref id) if id == "ghost"));
        assert_eq!(err.to_string(), "unknown quest: ghost");
    }

    #[test]
    fn completed_quests_are_kept() {
        let mut registry = QuestRegistry::new();
        registry.unlock(&def("a", 1)).unwrap();
        registry.unlock(&def("b", 1)).unwrap();
        registry.advance("a").unwrap();
        assert_eq!(registry.len(), 2);
        let ids: Vec<_> = registry.all().map(Quest::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn duplicate_catalog_quests_rejected() {
        let catalog = Catalog {
            quests: vec![def("a", 1), def("a", 2)],
            ..Catalog::default()
        };
        assert!(matches!(
            QuestRegistry::from_catalog(&catalog),
            Err(QuestError::DuplicateQuest(_))
        ));
    }
}
