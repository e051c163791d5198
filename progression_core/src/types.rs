//! Core enumerations shared by the modifier and skill engines

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric character stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    // Resources
    Health,
    RegenRate,
    // Offense
    Damage,
    AttackSpeed,
    AttackRange,
    CritChance,
    CritDamage,
    LifeSteal,
    // Defense
    Defense,
    Dodge,
    Reflect,
    FireResistance,
    WaterResistance,
    EarthResistance,
    WindResistance,
    // Utility
    MoveSpeed,
    CollectionRadius,
    Luck,
}

impl Attribute {
    /// Number of attributes, used to size resolved tables
    pub const COUNT: usize = 18;

    /// Get all attributes in declaration order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Health,
            Attribute::RegenRate,
            Attribute::Damage,
            Attribute::AttackSpeed,
            Attribute::AttackRange,
            Attribute::CritChance,
            Attribute::CritDamage,
            Attribute::LifeSteal,
            Attribute::Defense,
            Attribute::Dodge,
            Attribute::Reflect,
            Attribute::FireResistance,
            Attribute::WaterResistance,
            Attribute::EarthResistance,
            Attribute::WindResistance,
            Attribute::MoveSpeed,
            Attribute::CollectionRadius,
            Attribute::Luck,
        ]
    }

    /// Position of this attribute in [`Attribute::all`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Configuration key for this attribute
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Health => "health",
            Attribute::RegenRate => "regen_rate",
            Attribute::Damage => "damage",
            Attribute::AttackSpeed => "attack_speed",
            Attribute::AttackRange => "attack_range",
            Attribute::CritChance => "crit_chance",
            Attribute::CritDamage => "crit_damage",
            Attribute::LifeSteal => "life_steal",
            Attribute::Defense => "defense",
            Attribute::Dodge => "dodge",
            Attribute::Reflect => "reflect",
            Attribute::FireResistance => "fire_resistance",
            Attribute::WaterResistance => "water_resistance",
            Attribute::EarthResistance => "earth_resistance",
            Attribute::WindResistance => "wind_resistance",
            Attribute::MoveSpeed => "move_speed",
            Attribute::CollectionRadius => "collection_radius",
            Attribute::Luck => "luck",
        }
    }

    /// Value used when a base template does not list this attribute
    pub fn default_base(self) -> f64 {
        match self {
            Attribute::Health => 100.0,
            Attribute::Damage => 10.0,
            Attribute::AttackSpeed => 1.0,
            Attribute::AttackRange => 1.0,
            Attribute::MoveSpeed => 5.0,
            Attribute::CollectionRadius => 1.5,
            Attribute::CritDamage => 1.5,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::all()
            .iter()
            .copied()
            .find(|a| a.key() == s)
            .ok_or_else(|| format!("unknown attribute '{}'", s))
    }
}

/// Why a modifier exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Base,
    LevelUp,
    Passive,
    Active,
    EquipmentWeapon,
    EquipmentArmor,
    EquipmentAccessory,
    EquipmentSpecial,
    Consumable,
    Buff,
    Debuff,
}

impl Origin {
    /// Get all origins
    pub fn all() -> &'static [Origin] {
        &[
            Origin::Base,
            Origin::LevelUp,
            Origin::Passive,
            Origin::Active,
            Origin::EquipmentWeapon,
            Origin::EquipmentArmor,
            Origin::EquipmentAccessory,
            Origin::EquipmentSpecial,
            Origin::Consumable,
            Origin::Buff,
            Origin::Debuff,
        ]
    }

    /// Permanent origins persist across reloads and own a durable backing store
    pub fn is_permanent(self) -> bool {
        matches!(
            self,
            Origin::EquipmentWeapon
                | Origin::EquipmentArmor
                | Origin::EquipmentAccessory
                | Origin::EquipmentSpecial
        )
    }

    /// Transient origins are expected to expire or be withdrawn
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            Origin::Buff | Origin::Debuff | Origin::Consumable | Origin::Passive | Origin::Active
        )
    }
}

/// How a modifier composes with the base value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Summed onto the base value
    Additive,
    /// Applied as `(1 + magnitude)` after the additive layer
    Multiplicative,
}

/// Equipment slot for gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Ring,
    Amulet,
    Relic,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Ring,
            EquipmentSlot::Amulet,
            EquipmentSlot::Relic,
        ]
    }
}

/// Elemental affinity of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    #[default]
    Neutral,
    Fire,
    Water,
    Earth,
    Wind,
    Lightning,
    Ice,
    Light,
    Dark,
}

/// Behavioral category of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillArchetype {
    Projectile,
    Area,
    Passive,
}

impl fmt::Display for SkillArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillArchetype::Projectile => f.write_str("projectile"),
            SkillArchetype::Area => f.write_str("area"),
            SkillArchetype::Passive => f.write_str("passive"),
        }
    }
}

/// Identifier for a skill
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub String);

impl From<&str> for SkillId {
    fn from(s: &str) -> Self {
        SkillId(s.to_string())
    }
}

impl From<String> for SkillId {
    fn from(s: String) -> Self {
        SkillId(s)
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_index_matches_all() {
        assert_eq!(Attribute::all().len(), Attribute::COUNT);
        for (i, attribute) in Attribute::all().iter().enumerate() {
            assert_eq!(attribute.index(), i);
        }
    }

    #[test]
    fn test_attribute_key_round_trip() {
        for attribute in Attribute::all() {
            assert_eq!(attribute.key().parse::<Attribute>(), Ok(*attribute));
        }
        assert!("mana".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_origin_classes_are_disjoint() {
        for origin in Origin::all() {
            assert!(!(origin.is_permanent() && origin.is_transient()), "{:?}", origin);
        }
        assert!(Origin::EquipmentWeapon.is_permanent());
        assert!(Origin::Buff.is_transient());
        assert!(!Origin::LevelUp.is_permanent());
        assert!(!Origin::LevelUp.is_transient());
    }
}
