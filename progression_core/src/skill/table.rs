//! SkillProgressionTable - Level to stat-variant mapping for one skill

use crate::skill::{SkillError, SkillStatVariant};
use crate::types::SkillArchetype;
use std::collections::BTreeMap;

/// Stored per-level stats plus the defaults used to synthesize missing levels
#[derive(Debug, Clone, PartialEq)]
pub struct SkillProgressionTable {
    archetype: SkillArchetype,
    defaults: SkillStatVariant,
    levels: BTreeMap<u32, SkillStatVariant>,
}

impl SkillProgressionTable {
    /// Create an empty table; the archetype is taken from `defaults`
    pub fn new(defaults: SkillStatVariant) -> Self {
        SkillProgressionTable {
            archetype: defaults.archetype(),
            defaults,
            levels: BTreeMap::new(),
        }
    }

    pub fn archetype(&self) -> SkillArchetype {
        self.archetype
    }

    pub fn defaults(&self) -> &SkillStatVariant {
        &self.defaults
    }

    /// Replace the default fields used for synthesized levels
    pub fn set_defaults(&mut self, defaults: SkillStatVariant) -> Result<(), SkillError> {
        self.check_archetype(&defaults)?;
        self.defaults = defaults;
        Ok(())
    }

    /// Store the variant for a level, overwriting any existing entry
    pub fn set_level(&mut self, level: u32, variant: SkillStatVariant) -> Result<(), SkillError> {
        if level == 0 {
            return Err(SkillError::InvalidLevel(level));
        }
        self.check_archetype(&variant)?;
        self.levels.insert(level, variant);
        Ok(())
    }

    /// Stored variant for a level, or a freshly synthesized default
    pub fn get_level(&self, level: u32) -> SkillStatVariant {
        match self.levels.get(&level) {
            Some(variant) => variant.clone(),
            None => self.synthesize(level),
        }
    }

    /// Stored variant only, without synthesis
    pub fn stored(&self, level: u32) -> Option<&SkillStatVariant> {
        self.levels.get(&level)
    }

    /// Greatest stored level, or 1 if nothing is stored
    pub fn max_stored_level(&self) -> u32 {
        self.levels.keys().next_back().copied().unwrap_or(1)
    }

    /// Stored variant for a level, synthesizing and storing it first if missing
    ///
    /// `level` must be at least 1.
    pub(crate) fn materialize(&mut self, level: u32) -> SkillStatVariant {
        if let Some(variant) = self.levels.get(&level) {
            return variant.clone();
        }
        let variant = self.synthesize(level);
        self.levels.insert(level, variant.clone());
        variant
    }

    /// Administrative removal of a stored level
    pub fn remove_level(&mut self, level: u32) -> Option<SkillStatVariant> {
        self.levels.remove(&level)
    }

    pub fn levels(&self) -> impl Iterator<Item = (u32, &SkillStatVariant)> {
        self.levels.iter().map(|(l, v)| (*l, v))
    }

    fn synthesize(&self, level: u32) -> SkillStatVariant {
        let mut variant = self.defaults.clone();
        variant.base_mut().level = level;
        variant
    }

    fn check_archetype(&self, variant: &SkillStatVariant) -> Result<(), SkillError> {
        if variant.archetype() != self.archetype {
            return Err(SkillError::ArchetypeMismatch {
                expected: self.archetype,
                found: variant.archetype(),
            });
        }
        Ok(())
    }
}
