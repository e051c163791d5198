//! progression_core - Stat and skill modifier resolution for character progression
//!
//! This library provides:
//! - ModifierLedger: Tagged modifier records grouped by origin
//! - AttributeResolver: Current attribute values from base template and ledger
//! - SkillProgressionTable / Skill: Level-indexed, per-archetype skill stats
//! - EquipmentEffectBridge: Equipment-granted adjustments to every owned skill

pub mod attribute;
pub mod character;
pub mod config;
pub mod equipment;
pub mod modifier;
pub mod prelude;
pub mod skill;
pub mod types;

// Re-export core types for convenience
pub use attribute::{AttributeResolver, AttributeValue, BaseTemplate, BaseValueProvider};
pub use character::Character;
pub use config::{default_items, default_skills, default_templates, ConfigError, SkillCatalog};
pub use equipment::{
    build_effects, EffectConfig, EffectFilter, EquipError, EquipmentEffectBridge, ItemCatalog,
    ItemDefinition, ItemKind, Rarity, SkillInteractionEffect,
};
pub use modifier::{
    ExpiryScheduler, LedgerError, ModifierId, ModifierLedger, ModifierRecord, ModifierTarget,
    PermanentModifiers,
};
pub use skill::{
    LevelDataSource, LevelDataTable, LevelUpError, NoLevelData, Skill, SkillError, SkillLoadout,
    SkillProgressionTable, SkillStatVariant,
};
pub use types::{Attribute, Element, EquipmentSlot, ModifierKind, Origin, SkillArchetype, SkillId};
