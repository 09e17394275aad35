//! The per-quest state machine.
//!
//! `NotStarted -> InProgress(stage) -> Completed`. Starting is purely
//! presentational. Only [`Quest::advance`] changes state: stage flags flip
//! from false to true once, `current_stage` never decreases, and a
//! completed quest stays completed.

use chrono::{DateTime, Utc};
use gs_core::QuestDefinition;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One narrative stage of a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestStage {
    /// Lore revealed when the stage completes.
    pub lore: String,
    /// Whether the stage has been completed.
    pub completed: bool,
}

/// Where a quest is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestStatus {
    /// No stage completed yet.
    NotStarted,
    /// Working on the stage at this index.
    InProgress(usize),
    /// Finished.
    Completed,
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not started"),
            Self::InProgress(stage) => write!(f, "Stage {}", stage + 1),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A stage that was just completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageLore {
    /// Zero-based stage index.
    pub index: usize,
    /// The stage's lore.
    pub lore: String,
}

/// What a call to [`Quest::advance`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// A stage completed and more remain.
    Stage(StageLore),
    /// The quest completed. `stage` is the final stage when its completion
    /// and the quest's happened in the same call.
    Completed {
        /// The stage completed by this call, if any.
        stage: Option<StageLore>,
        /// The quest's completion lore.
        epilogue: String,
    },
    /// The quest was already finished; nothing changed.
    AlreadyCompleted,
}

impl Advance {
    /// Whether this call finished the quest.
    pub fn finished_quest(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// A player's copy of a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    id: String,
    title: String,
    intro: String,
    epilogue: String,
    stages: Vec<QuestStage>,
    current_stage: usize,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl Quest {
    /// Create a quest with the given stage lore.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        stages: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            intro: String::new(),
            epilogue: String::new(),
            stages: stages
                .into_iter()
                .map(|lore| QuestStage {
                    lore: lore.into(),
                    completed: false,
                })
                .collect(),
            current_stage: 0,
            completed: false,
            completed_at: None,
        }
    }

    /// Create a fresh instance of a catalog quest.
    pub fn from_definition(def: &QuestDefinition) -> Self {
        let mut quest = Self::new(&def.id, &def.title, &def.stages);
        quest.intro = def.intro.clone();
        quest.epilogue = def.epilogue.clone();
        quest
    }

    /// Stable quest id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Completion lore.
    pub fn epilogue(&self) -> &str {
        &self.epilogue
    }

    /// All stages in order.
    pub fn stages(&self) -> &[QuestStage] {
        &self.stages
    }

    /// Index of the next stage to complete; equals the stage count once
    /// every stage is done.
    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    /// Whether the quest has finished.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the quest finished.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Current lifecycle state.
    pub fn status(&self) -> QuestStatus {
        if self.completed {
            QuestStatus::Completed
        } else if self.current_stage == 0 {
            QuestStatus::NotStarted
        } else {
            QuestStatus::InProgress(self.current_stage)
        }
    }

    /// The intro lore. Starting a quest does not change its state.
    pub fn start(&self) -> &str {
        &self.intro
    }

    /// Complete the next stage.
    ///
    /// Finishing the last stage also completes the quest, so a quest with
    /// `k` stages completes on the `k`-th call. A quest with no stages
    /// completes on the first call. Calls after completion change nothing
    /// and return [`Advance::AlreadyCompleted`].
    pub fn advance(&mut self) -> Advance {
        if self.completed {
            return Advance::AlreadyCompleted;
        }

        let Some(stage) = self.stages.get_mut(self.current_stage) else {
            self.finish();
            return Advance::Completed {
                stage: None,
                epilogue: self.epilogue.clone(),
            };
        };

        stage.completed = true;
        let done = StageLore {
            index: self.current_stage,
            lore: stage.lore.clone(),
        };
        self.current_stage += 1;
        info!(quest = %self.id, stage = done.index, "quest stage completed");

        if self.current_stage >= self.stages.len() {
            self.finish();
            Advance::Completed {
                stage: Some(done),
                epilogue: self.epilogue.clone(),
            }
        } else {
            Advance::Stage(done)
        }
    }

    fn finish(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
        info!(quest = %self.id, "quest completed");
    }
}
