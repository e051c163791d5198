//! Skill stats - Per-archetype shapes, level tables and owned skills

mod instance;
mod loadout;
mod source;
mod stats;
mod table;

pub use instance::Skill;
pub use loadout::{derive_effective, SkillLoadout};
pub use source::{LevelDataSource, LevelDataTable, NoLevelData};
pub use stats::{
    AreaStats, BaseSkillStat, PassiveStats, PercentIncrease, Persistence, ProjectileStats,
    SkillStatVariant,
};
pub use table::SkillProgressionTable;

use crate::types::{SkillArchetype, SkillId};
use thiserror::Error;

/// Rejected progression-table write
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillError {
    #[error("expected {expected} stats, got {found}")]
    ArchetypeMismatch {
        expected: SkillArchetype,
        found: SkillArchetype,
    },
    #[error("invalid level {0}")]
    InvalidLevel(u32),
}

/// Rejected level transition; the skill is left unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelUpError {
    #[error("level {0} is not a valid target")]
    InvalidTarget(u32),
    #[error("cannot go from level {current} down to {requested}")]
    Downgrade { current: u32, requested: u32 },
    #[error("level {requested} exceeds max level {max}")]
    ExceedsMax { requested: u32, max: u32 },
    #[error("already at max level {0}")]
    AlreadyMaxLevel(u32),
    #[error("skill {0} is not owned")]
    UnknownSkill(SkillId),
}
