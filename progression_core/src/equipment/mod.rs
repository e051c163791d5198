//! Equipment - Item definitions and the skill interaction effects they grant

mod bridge;
mod effect;
mod item;

pub use bridge::EquipmentEffectBridge;
pub use effect::{
    Behavior, CategoryAmplifier, CooldownReduction, EffectFilter, ElementAmplifier,
    ElementalPowerBonus, SkillInteractionEffect, SpecialBehavior, StatCategory,
};
pub use item::{build_effects, EffectConfig, ItemCatalog, ItemDefinition, ItemKind, Rarity, StatGrant};

use crate::modifier::LedgerError;
use crate::types::EquipmentSlot;
use thiserror::Error;

/// Rejected equip request; nothing is changed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error("{kind:?} item cannot be equipped in {slot:?}")]
    SlotMismatch { kind: ItemKind, slot: EquipmentSlot },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
