//! Prelude module for convenient imports
//!
//! ```rust
//! use progression_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Attribute, Element, EquipmentSlot, ModifierKind, Origin, SkillArchetype, SkillId};

// Attribute engine
pub use crate::attribute::{AttributeResolver, BaseTemplate, BaseValueProvider};
pub use crate::modifier::{ExpiryScheduler, ModifierId, ModifierLedger, ModifierRecord};

// Skills
pub use crate::skill::{LevelDataSource, NoLevelData, Skill, SkillLoadout, SkillStatVariant};

// Equipment
pub use crate::equipment::{EquipmentEffectBridge, ItemDefinition, ItemKind, SkillInteractionEffect};

// Facade
pub use crate::character::Character;
