//! Item definitions and the effect factory

use crate::equipment::{
    Behavior, CategoryAmplifier, CooldownReduction, EffectFilter, ElementAmplifier,
    ElementalPowerBonus, SkillInteractionEffect, SpecialBehavior, StatCategory,
};
use crate::modifier::ModifierRecord;
use crate::types::{Attribute, EquipmentSlot, ModifierKind, Origin};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Item category, which decides the modifier origin of its stat grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Accessory,
    Special,
}

impl ItemKind {
    pub fn origin(self) -> Origin {
        match self {
            ItemKind::Weapon => Origin::EquipmentWeapon,
            ItemKind::Armor => Origin::EquipmentArmor,
            ItemKind::Accessory => Origin::EquipmentAccessory,
            ItemKind::Special => Origin::EquipmentSpecial,
        }
    }

    /// Whether an item of this kind may occupy `slot`
    pub fn fits(self, slot: EquipmentSlot) -> bool {
        matches!(
            (self, slot),
            (ItemKind::Weapon, EquipmentSlot::Weapon)
                | (ItemKind::Armor, EquipmentSlot::Armor)
                | (ItemKind::Accessory, EquipmentSlot::Ring | EquipmentSlot::Amulet)
                | (ItemKind::Special, EquipmentSlot::Relic)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Scale applied to the bonus part of every interaction effect
    pub fn effect_scale(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.1,
            Rarity::Rare => 1.25,
            Rarity::Epic => 1.5,
            Rarity::Legendary => 2.0,
        }
    }
}

/// A plain attribute modifier granted while the item is equipped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatGrant {
    pub attribute: Attribute,
    pub kind: ModifierKind,
    pub magnitude: f64,
}

/// Static configuration of one skill interaction effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EffectConfig {
    AmplifyElement {
        #[serde(default)]
        filter: EffectFilter,
        multiplier: f64,
    },
    AmplifyCategory {
        #[serde(default)]
        filter: EffectFilter,
        category: StatCategory,
        multiplier: f64,
    },
    CooldownReduction {
        #[serde(default)]
        filter: EffectFilter,
        reduction: f64,
    },
    ElementalPower {
        #[serde(default)]
        filter: EffectFilter,
        bonus: f64,
    },
    Enable {
        #[serde(default)]
        filter: EffectFilter,
        behavior: Behavior,
    },
}

impl EffectConfig {
    /// Build the effect, scaling its bonus part by `scale`
    pub fn build(&self, scale: f64) -> Box<dyn SkillInteractionEffect> {
        let amplify = |multiplier: f64| 1.0 + (multiplier - 1.0) * scale;
        match self {
            EffectConfig::AmplifyElement { filter, multiplier } => {
                Box::new(ElementAmplifier::new(filter.clone(), amplify(*multiplier)))
            }
            EffectConfig::AmplifyCategory {
                filter,
                category,
                multiplier,
            } => Box::new(CategoryAmplifier::new(filter.clone(), *category, amplify(*multiplier))),
            EffectConfig::CooldownReduction { filter, reduction } => {
                Box::new(CooldownReduction::new(filter.clone(), reduction * scale))
            }
            EffectConfig::ElementalPower { filter, bonus } => {
                Box::new(ElementalPowerBonus::new(filter.clone(), bonus * scale))
            }
            EffectConfig::Enable { filter, behavior } => {
                Box::new(SpecialBehavior::new(filter.clone(), *behavior))
            }
        }
    }
}

/// An equippable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub grants: Vec<StatGrant>,
    #[serde(default)]
    pub effects: Vec<EffectConfig>,
}

impl ItemDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        ItemDefinition {
            id: id.into(),
            name: name.into(),
            kind,
            rarity: Rarity::Common,
            grants: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_grant(mut self, attribute: Attribute, kind: ModifierKind, magnitude: f64) -> Self {
        self.grants.push(StatGrant {
            attribute,
            kind,
            magnitude,
        });
        self
    }

    pub fn with_effect(mut self, effect: EffectConfig) -> Self {
        self.effects.push(effect);
        self
    }

    /// Stat grants as modifier records tagged with the slot they occupy
    pub fn modifier_records(&self, slot: EquipmentSlot) -> Vec<ModifierRecord> {
        self.grants
            .iter()
            .map(|g| ModifierRecord::new(g.attribute, self.kind.origin(), g.kind, g.magnitude).with_slot(slot))
            .collect()
    }
}

/// Build an item's interaction effects
///
/// Pure: the same item always yields the same effect set.
pub fn build_effects(item: &ItemDefinition) -> Vec<Box<dyn SkillInteractionEffect>> {
    let scale = item.rarity.effect_scale();
    item.effects.iter().map(|config| config.build(scale)).collect()
}

/// Item definitions by id
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item, returning any definition it replaced
    pub fn register(&mut self, item: ItemDefinition) -> Option<ItemDefinition> {
        self.items.insert(item.id.clone(), item)
    }

    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::SkillStatVariant;
    use crate::types::{Element, SkillArchetype};

    fn ember_ring(rarity: Rarity) -> ItemDefinition {
        ItemDefinition::new("ember_ring", "Ember Ring", ItemKind::Accessory)
            .with_rarity(rarity)
            .with_effect(EffectConfig::AmplifyElement {
                filter: EffectFilter::elements([Element::Fire]),
                multiplier: 1.5,
            })
    }

    #[test]
    fn test_kind_slots() {
        assert!(ItemKind::Accessory.fits(EquipmentSlot::Ring));
        assert!(ItemKind::Accessory.fits(EquipmentSlot::Amulet));
        assert!(!ItemKind::Weapon.fits(EquipmentSlot::Armor));
        assert_eq!(ItemKind::Special.origin(), Origin::EquipmentSpecial);
    }

    #[test]
    fn test_build_effects_is_deterministic() {
        let item = ember_ring(Rarity::Rare);
        let mut first = SkillStatVariant::default_for(SkillArchetype::Projectile);
        first.base_mut().element = Element::Fire;
        let mut second = first.clone();

        for effect in build_effects(&item) {
            effect.apply(&mut first);
        }
        for effect in build_effects(&item) {
            effect.apply(&mut second);
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_rarity_scales_bonus_part() {
        let mut variant = SkillStatVariant::default_for(SkillArchetype::Projectile);
        variant.base_mut().element = Element::Fire;
        variant.base_mut().damage = 10.0;
        for effect in build_effects(&ember_ring(Rarity::Legendary)) {
            effect.apply(&mut variant);
        }
        // 1 + 0.5 × 2.0
        assert!((variant.base().damage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_modifier_records_use_kind_origin() {
        let sword = ItemDefinition::new("sword", "Sword", ItemKind::Weapon)
            .with_grant(Attribute::Damage, ModifierKind::Additive, 5.0);
        let records = sword.modifier_records(EquipmentSlot::Weapon);
        assert_eq!(
            records,
            vec![ModifierRecord::additive(Attribute::Damage, Origin::EquipmentWeapon, 5.0)
                .with_slot(EquipmentSlot::Weapon)]
        );
    }

    #[test]
    fn test_effect_config_from_toml() {
        let toml = r#"
type = "amplify_category"
category = "radius"
multiplier = 1.2

[filter]
archetypes = ["area"]
"#;
        let config: EffectConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config,
            EffectConfig::AmplifyCategory {
                filter: EffectFilter::archetypes([SkillArchetype::Area]),
                category: StatCategory::Radius,
                multiplier: 1.2,
            }
        );
    }
}
