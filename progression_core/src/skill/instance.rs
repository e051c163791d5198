//! Skill - One owned skill and its level state machine

use crate::skill::{LevelDataSource, LevelUpError, SkillProgressionTable, SkillStatVariant};
use crate::types::{SkillArchetype, SkillId};

/// A skill instance: its progression table plus the current level
///
/// Levels only move upward. Once the current level reaches the variant's
/// `max_level`, every further level-up is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    id: SkillId,
    table: SkillProgressionTable,
    current_level: u32,
    current: SkillStatVariant,
}

impl Skill {
    /// Create a skill at level 1 from its default fields alone
    pub fn new(id: impl Into<SkillId>, defaults: SkillStatVariant) -> Self {
        let table = SkillProgressionTable::new(defaults);
        let current = table.get_level(1);
        Skill {
            id: id.into(),
            table,
            current_level: 1,
            current,
        }
    }

    /// Create a skill at level 1, preferring external level data
    pub fn with_source(id: impl Into<SkillId>, defaults: SkillStatVariant, source: &dyn LevelDataSource) -> Self {
        let mut skill = Self::new(id, defaults);
        skill.current = skill.resolve_level(1, source);
        skill
    }

    pub fn id(&self) -> &SkillId {
        &self.id
    }

    pub fn archetype(&self) -> SkillArchetype {
        self.table.archetype()
    }

    pub fn level(&self) -> u32 {
        self.current_level
    }

    pub fn max_level(&self) -> u32 {
        self.current.base().max_level
    }

    pub fn is_max_level(&self) -> bool {
        self.current_level >= self.max_level()
    }

    pub fn table(&self) -> &SkillProgressionTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut SkillProgressionTable {
        &mut self.table
    }

    /// Resolved stats for the current level, before any equipment effects
    pub fn current_variant(&self) -> &SkillStatVariant {
        &self.current
    }

    /// Move to `new_level`, resolving its stats from `source`
    ///
    /// On error nothing changes.
    pub fn level_up(&mut self, new_level: u32, source: &dyn LevelDataSource) -> Result<u32, LevelUpError> {
        let max = self.max_level();
        if self.current_level >= max {
            return Err(LevelUpError::AlreadyMaxLevel(self.current_level));
        }
        if new_level == 0 {
            return Err(LevelUpError::InvalidTarget(new_level));
        }
        if new_level < self.current_level {
            return Err(LevelUpError::Downgrade {
                current: self.current_level,
                requested: new_level,
            });
        }
        if new_level > max {
            return Err(LevelUpError::ExceedsMax {
                requested: new_level,
                max,
            });
        }

        self.current = self.resolve_level(new_level, source);
        log::debug!("skill {} level {} -> {}", self.id, self.current_level, new_level);
        self.current_level = new_level;
        Ok(new_level)
    }

    /// Level up by exactly one
    pub fn level_up_next(&mut self, source: &dyn LevelDataSource) -> Result<u32, LevelUpError> {
        self.level_up(self.current_level.saturating_add(1), source)
    }

    fn resolve_level(&mut self, level: u32, source: &dyn LevelDataSource) -> SkillStatVariant {
        if let Some(variant) = source.level_data(&self.id, level, self.archetype()) {
            match self.table.set_level(level, variant) {
                Ok(()) => return self.table.get_level(level),
                Err(e) => log::warn!("discarding level {} data for {}: {}", level, self.id, e),
            }
        }
        self.table.materialize(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{LevelDataTable, NoLevelData, ProjectileStats};

    fn bolt() -> Skill {
        Skill::new("bolt", SkillStatVariant::default_for(SkillArchetype::Projectile))
    }

    #[test]
    fn test_level_up_rules() {
        let mut skill = bolt();
        assert_eq!(skill.level(), 1);
        assert_eq!(skill.max_level(), 5);

        assert_eq!(skill.level_up(3, &NoLevelData), Ok(3));
        assert_eq!(
            skill.level_up(2, &NoLevelData),
            Err(LevelUpError::Downgrade { current: 3, requested: 2 })
        );
        assert_eq!(
            skill.level_up(6, &NoLevelData),
            Err(LevelUpError::ExceedsMax { requested: 6, max: 5 })
        );
        assert_eq!(skill.level_up(0, &NoLevelData), Err(LevelUpError::InvalidTarget(0)));
        assert_eq!(skill.level(), 3);
    }

    #[test]
    fn test_max_level_is_terminal() {
        let mut skill = bolt();
        skill.level_up(5, &NoLevelData).unwrap();
        assert!(skill.is_max_level());
        assert_eq!(skill.level_up(5, &NoLevelData), Err(LevelUpError::AlreadyMaxLevel(5)));
        assert_eq!(skill.level_up_next(&NoLevelData), Err(LevelUpError::AlreadyMaxLevel(5)));
    }

    #[test]
    fn test_level_up_uses_source_data() {
        let mut data = LevelDataTable::new();
        let mut level_two = ProjectileStats::default();
        level_two.base.level = 2;
        level_two.base.damage = 25.0;
        level_two.pierce_count = 2;
        data.insert(SkillId::from("bolt"), 2, SkillStatVariant::Projectile(level_two));

        let mut skill = bolt();
        skill.level_up_next(&data).unwrap();
        let current = skill.current_variant().as_projectile().unwrap();
        assert!((current.base.damage - 25.0).abs() < f64::EPSILON);
        assert_eq!(current.pierce_count, 2);
        assert!(skill.table().stored(2).is_some());
    }

    #[test]
    fn test_level_up_without_data_synthesizes() {
        let mut skill = bolt();
        skill.level_up(4, &NoLevelData).unwrap();
        assert_eq!(skill.current_variant().base().level, 4);
        assert_eq!(skill.table().max_stored_level(), 4);
    }

    struct WrongShape;

    impl LevelDataSource for WrongShape {
        fn level_data(&self, _: &SkillId, _: u32, _: SkillArchetype) -> Option<SkillStatVariant> {
            Some(SkillStatVariant::default_for(SkillArchetype::Passive))
        }
    }

    #[test]
    fn test_mismatched_source_data_falls_back() {
        let mut skill = bolt();
        skill.level_up(2, &WrongShape).unwrap();
        assert_eq!(skill.current_variant().archetype(), SkillArchetype::Projectile);
        assert_eq!(skill.current_variant().base().level, 2);
    }

    #[test]
    fn test_same_level_refresh_below_max() {
        let mut skill = bolt();
        assert_eq!(skill.level_up(1, &NoLevelData), Ok(1));
    }
}
