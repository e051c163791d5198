//! Level-data sources - External per-level stats for skills

use crate::skill::SkillStatVariant;
use crate::types::{SkillArchetype, SkillId};
use std::collections::{BTreeMap, HashMap};

/// Supplies fully populated level stats, or `None` when no data exists
pub trait LevelDataSource {
    fn level_data(&self, skill: &SkillId, level: u32, archetype: SkillArchetype) -> Option<SkillStatVariant>;
}

/// Source with no data at all; every level falls back to synthesized defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLevelData;

impl LevelDataSource for NoLevelData {
    fn level_data(&self, _skill: &SkillId, _level: u32, _archetype: SkillArchetype) -> Option<SkillStatVariant> {
        None
    }
}

/// In-memory level data keyed by skill and level
#[derive(Debug, Clone, Default)]
pub struct LevelDataTable {
    entries: HashMap<SkillId, BTreeMap<u32, SkillStatVariant>>,
}

impl LevelDataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill: SkillId, level: u32, variant: SkillStatVariant) {
        self.entries.entry(skill).or_default().insert(level, variant);
    }

    /// Levels with data for one skill
    pub fn levels(&self, skill: &SkillId) -> Vec<u32> {
        self.entries
            .get(skill)
            .map(|levels| levels.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LevelDataSource for LevelDataTable {
    fn level_data(&self, skill: &SkillId, level: u32, archetype: SkillArchetype) -> Option<SkillStatVariant> {
        self.entries
            .get(skill)?
            .get(&level)
            .filter(|v| v.archetype() == archetype)
            .cloned()
    }
}
