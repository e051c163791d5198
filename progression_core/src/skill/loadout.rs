//! SkillLoadout - The skills a character owns, with equipment-adjusted stats

use crate::equipment::SkillInteractionEffect;
use crate::skill::{LevelDataSource, LevelUpError, Skill, SkillStatVariant};
use crate::types::SkillId;

#[derive(Debug, Clone)]
struct LoadoutEntry {
    skill: Skill,
    effective: SkillStatVariant,
}

/// Owned skills plus their effective (equipment-adjusted) variants
///
/// A skill's resolved variant is never mutated by equipment. The effective
/// variant is re-derived from it whenever the effect set or the skill changes.
#[derive(Debug, Clone, Default)]
pub struct SkillLoadout {
    entries: Vec<LoadoutEntry>,
}

impl SkillLoadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill; returns false if a skill with the same id is already owned
    pub fn learn(&mut self, skill: Skill, effects: &[&dyn SkillInteractionEffect]) -> bool {
        if self.get(skill.id()).is_some() {
            return false;
        }
        let effective = derive_effective(skill.current_variant(), effects);
        log::debug!("learned skill {}", skill.id());
        self.entries.push(LoadoutEntry { skill, effective });
        true
    }

    /// Remove a skill
    pub fn forget(&mut self, id: &SkillId) -> Option<Skill> {
        let pos = self.entries.iter().position(|e| e.skill.id() == id)?;
        Some(self.entries.remove(pos).skill)
    }

    pub fn get(&self, id: &SkillId) -> Option<&Skill> {
        self.entries.iter().find(|e| e.skill.id() == id).map(|e| &e.skill)
    }

    /// Stats after equipment effects
    pub fn effective(&self, id: &SkillId) -> Option<&SkillStatVariant> {
        self.entries.iter().find(|e| e.skill.id() == id).map(|e| &e.effective)
    }

    /// Level a skill up and re-derive its effective stats
    pub fn level_up(
        &mut self,
        id: &SkillId,
        new_level: u32,
        source: &dyn LevelDataSource,
        effects: &[&dyn SkillInteractionEffect],
    ) -> Result<u32, LevelUpError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.skill.id() == id)
            .ok_or_else(|| LevelUpError::UnknownSkill(id.clone()))?;
        let level = entry.skill.level_up(new_level, source)?;
        entry.effective = derive_effective(entry.skill.current_variant(), effects);
        Ok(level)
    }

    /// Re-derive every effective variant from scratch
    pub fn refresh_effective(&mut self, effects: &[&dyn SkillInteractionEffect]) {
        for entry in &mut self.entries {
            entry.effective = derive_effective(entry.skill.current_variant(), effects);
        }
        log::debug!("refreshed {} skills with {} effects", self.entries.len(), effects.len());
    }

    /// Owned skills in learn order, with their effective stats
    pub fn iter(&self) -> impl Iterator<Item = (&Skill, &SkillStatVariant)> {
        self.entries.iter().map(|e| (&e.skill, &e.effective))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Apply every effect, in order, to a copy of the resolved variant
pub fn derive_effective(resolved: &SkillStatVariant, effects: &[&dyn SkillInteractionEffect]) -> SkillStatVariant {
    let mut effective = resolved.clone();
    for effect in effects {
        effect.apply(&mut effective);
    }
    effective
}
