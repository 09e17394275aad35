//! Resources awarded by grind sessions.
//!
//! Every resource kind belongs to a production skill lineage and sits on
//! one of two tiers: a plentiful base material or a scarcer refined one.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A production skill that a resource feeds into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Logs and planks.
    Woodworking,
    /// Ores.
    Mining,
    /// Herbs.
    Herblore,
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Woodworking => write!(f, "woodworking"),
            Self::Mining => write!(f, "mining"),
            Self::Herblore => write!(f, "herblore"),
        }
    }
}

/// Which side of the lineage a resource is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceTier {
    /// Low-tier material, awarded in larger amounts.
    Base,
    /// Advanced material, awarded one or two at a time.
    Refined,
}

impl ResourceTier {
    /// Inclusive range of amounts awarded for a single drop of this tier.
    pub fn amount_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Base => 3..=6,
            Self::Refined => 1..=2,
        }
    }
}

/// A concrete resource kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Base woodworking material.
    Wood,
    /// Refined woodworking material.
    WoodOak,
    /// Base mining material.
    Copper,
    /// Refined mining material.
    Iron,
    /// Base herblore material.
    GuamLeaf,
    /// Refined herblore material.
    Marrentill,
}

impl ResourceKind {
    /// Base-tier kinds, one per skill.
    pub const BASE: [ResourceKind; 3] = [Self::Wood, Self::Copper, Self::GuamLeaf];

    /// Refined-tier kinds, one per skill.
    pub const REFINED: [ResourceKind; 3] = [Self::WoodOak, Self::Iron, Self::Marrentill];

    /// The snake_case resource name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::WoodOak => "wood_oak",
            Self::Copper => "copper",
            Self::Iron => "iron",
            Self::GuamLeaf => "guam_leaf",
            Self::Marrentill => "marrentill",
        }
    }

    /// The skill lineage this resource belongs to.
    pub fn skill(self) -> Skill {
        match self {
            Self::Wood | Self::WoodOak => Skill::Woodworking,
            Self::Copper | Self::Iron => Skill::Mining,
            Self::GuamLeaf | Self::Marrentill => Skill::Herblore,
        }
    }

    /// Whether this is a base or refined material.
    pub fn tier(self) -> ResourceTier {
        match self {
            Self::Wood | Self::Copper | Self::GuamLeaf => ResourceTier::Base,
            Self::WoodOak | Self::Iron | Self::Marrentill => ResourceTier::Refined,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::BASE
            .into_iter()
            .chain(Self::REFINED)
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownResource(s.trim().to_string()))
    }
}
