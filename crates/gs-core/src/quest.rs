use serde::{Deserialize, Serialize};

/// Static description of a quest: its stages and narrative text.
///
/// Definitions are catalog content. Per-player progress lives in quest
/// instances created from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefinition {
    /// Stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Lore shown when the quest is started.
    #[serde(default)]
    pub intro: String,
    /// Lore for each stage, in order.
    pub stages: Vec<String>,
    /// Lore shown when the quest completes.
    #[serde(default)]
    pub epilogue: String,
}

impl QuestDefinition {
    /// Create a definition with no intro, stages, or epilogue.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            intro: String::new(),
            stages: Vec::new(),
            epilogue: String::new(),
        }
    }

    /// Set the intro lore.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Append a stage.
    pub fn with_stage(mut self, lore: impl Into<String>) -> Self {
        self.stages.push(lore.into());
        self
    }

    /// Set the completion lore.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = epilogue.into();
        self
    }
}
