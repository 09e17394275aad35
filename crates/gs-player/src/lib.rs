//! Player ledger for Grindstone.
//!
//! The reward engine only describes rewards. A [`Profile`] is where they
//! land: currency and resources are added up, found items wait unopened
//! until [`Profile::open`] resolves them through the item catalog, and
//! level follows from total XP.

pub mod error;
pub mod profile;

pub use error::{PlayerError, PlayerResult};
pub use profile::{LevelUp, Profile, XP_PER_LEVEL};
