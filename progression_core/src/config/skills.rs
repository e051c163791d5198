//! Skill configuration loading

use super::ConfigError;
use crate::skill::{LevelDataSource, LevelDataTable, Skill, SkillStatVariant};
use crate::types::{SkillArchetype, SkillId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for skill configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    pub skills: Vec<SkillEntry>,
}

/// One skill: its default fields plus any explicit per-level stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: SkillId,
    pub default: SkillStatVariant,
    #[serde(default)]
    pub levels: Vec<LevelEntry>,
}

/// Stats for one level, written as overrides on top of the skill's default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelEntry {
    pub level: u32,
    /// Fields that differ from the default; nested tables merge key by key
    #[serde(flatten)]
    pub overrides: toml::Table,
}

impl LevelEntry {
    /// Merge the overrides onto `defaults`, producing the stats for this level
    fn resolve(self, id: &SkillId, defaults: &SkillStatVariant) -> Result<SkillStatVariant, ConfigError> {
        if self.level == 0 {
            return Err(ConfigError::ValidationError(format!(
                "skill '{}' has level data for level 0",
                id
            )));
        }
        let mut table = match toml::Value::try_from(defaults) {
            Ok(toml::Value::Table(table)) => table,
            Ok(_) => {
                return Err(ConfigError::ValidationError(format!(
                    "skill '{}' defaults are not a table",
                    id
                )))
            }
            Err(e) => {
                return Err(ConfigError::ValidationError(format!(
                    "skill '{}' defaults: {}",
                    id, e
                )))
            }
        };
        merge_tables(&mut table, self.overrides);

        let mut variant: SkillStatVariant = toml::Value::Table(table).try_into()?;
        if variant.archetype() != defaults.archetype() {
            return Err(ConfigError::ValidationError(format!(
                "skill '{}' level {} is {}, expected {}",
                id,
                self.level,
                variant.archetype(),
                defaults.archetype()
            )));
        }
        variant.base_mut().level = self.level;
        Ok(variant)
    }
}

fn merge_tables(into: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(nested) => match into.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, nested),
                _ => {
                    into.insert(key, toml::Value::Table(nested));
                }
            },
            value => {
                into.insert(key, value);
            }
        }
    }
}

/// Default stats and level data for every configured skill
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    defaults: HashMap<SkillId, SkillStatVariant>,
    levels: LevelDataTable,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default fields for a skill
    pub fn defaults(&self, id: &SkillId) -> Option<&SkillStatVariant> {
        self.defaults.get(id)
    }

    /// Create a level 1 instance of a configured skill
    pub fn instantiate(&self, id: &SkillId) -> Option<Skill> {
        let defaults = self.defaults.get(id)?.clone();
        Some(Skill::with_source(id.clone(), defaults, &self.levels))
    }

    pub fn level_table(&self) -> &LevelDataTable {
        &self.levels
    }

    pub fn ids(&self) -> impl Iterator<Item = &SkillId> {
        self.defaults.keys()
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    fn insert(&mut self, entry: SkillEntry) -> Result<(), ConfigError> {
        for level in entry.levels {
            let number = level.level;
            let variant = level.resolve(&entry.id, &entry.default)?;
            self.levels.insert(entry.id.clone(), number, variant);
        }
        self.defaults.insert(entry.id, entry.default);
        Ok(())
    }
}

impl LevelDataSource for SkillCatalog {
    fn level_data(&self, skill: &SkillId, level: u32, archetype: SkillArchetype) -> Option<SkillStatVariant> {
        self.levels.level_data(skill, level, archetype)
    }
}

fn build(config: SkillsConfig) -> Result<SkillCatalog, ConfigError> {
    let mut catalog = SkillCatalog::new();
    for entry in config.skills {
        catalog.insert(entry)?;
    }
    Ok(catalog)
}

/// Load skill configurations from a TOML file
pub fn load_skill_catalog(path: &Path) -> Result<SkillCatalog, ConfigError> {
    build(super::load_toml(path)?)
}

/// Load skill configurations from a TOML string
pub fn parse_skill_catalog(content: &str) -> Result<SkillCatalog, ConfigError> {
    build(super::parse_toml(content)?)
}

/// Get the bundled skill configurations
pub fn default_skills() -> SkillCatalog {
    let toml = include_str!("../../config/skills.toml");
    parse_skill_catalog(toml).unwrap_or_else(|e| {
        log::warn!("bundled skills failed to load: {}", e);
        let mut catalog = SkillCatalog::new();
        catalog.defaults.insert(
            SkillId::from("basic_shot"),
            SkillStatVariant::default_for(SkillArchetype::Projectile),
        );
        catalog
    })
}
