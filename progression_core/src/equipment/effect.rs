//! SkillInteractionEffect - Equipment-granted adjustments to skill stats
//!
//! Every effect here is commutative with every other: multipliers on the
//! same field multiply, additive bonuses add, toggles OR. The effective
//! variant is therefore independent of equip order.

use crate::skill::SkillStatVariant;
use crate::types::{Element, SkillArchetype};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which skills an effect applies to; an empty list means "all"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectFilter {
    pub archetypes: Vec<SkillArchetype>,
    pub elements: Vec<Element>,
}

impl EffectFilter {
    /// Filter that matches every skill
    pub fn any() -> Self {
        Self::default()
    }

    pub fn archetypes(archetypes: impl IntoIterator<Item = SkillArchetype>) -> Self {
        EffectFilter {
            archetypes: archetypes.into_iter().collect(),
            elements: Vec::new(),
        }
    }

    pub fn elements(elements: impl IntoIterator<Item = Element>) -> Self {
        EffectFilter {
            archetypes: Vec::new(),
            elements: elements.into_iter().collect(),
        }
    }

    pub fn matches(&self, variant: &SkillStatVariant) -> bool {
        (self.archetypes.is_empty() || self.archetypes.contains(&variant.archetype()))
            && (self.elements.is_empty() || self.elements.contains(&variant.base().element))
    }
}

/// Strategy that adjusts a skill's stats in place
pub trait SkillInteractionEffect: fmt::Debug {
    /// Short label for display
    fn name(&self) -> &'static str;

    fn filter(&self) -> &EffectFilter;

    /// Unconditionally adjust the variant
    fn modify(&self, variant: &mut SkillStatVariant);

    fn applies_to(&self, variant: &SkillStatVariant) -> bool {
        self.filter().matches(variant)
    }

    /// Adjust the variant if the filter matches; returns whether it did
    fn apply(&self, variant: &mut SkillStatVariant) -> bool {
        if !self.applies_to(variant) {
            return false;
        }
        self.modify(variant);
        true
    }
}

/// Multiplies skill damage for matching elements
#[derive(Debug, Clone, PartialEq)]
pub struct ElementAmplifier {
    pub filter: EffectFilter,
    pub multiplier: f64,
}

impl ElementAmplifier {
    pub fn new(filter: EffectFilter, multiplier: f64) -> Self {
        ElementAmplifier { filter, multiplier }
    }
}

impl SkillInteractionEffect for ElementAmplifier {
    fn name(&self) -> &'static str {
        "element_amplifier"
    }

    fn filter(&self) -> &EffectFilter {
        &self.filter
    }

    fn modify(&self, variant: &mut SkillStatVariant) {
        variant.base_mut().damage *= self.multiplier;
    }
}

/// Numeric stat groups a [`CategoryAmplifier`] can scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    Damage,
    ProjectileSpeed,
    ProjectileScale,
    Range,
    /// Area radius and projectile explosion radius
    Radius,
    /// Area persistence and passive effect duration
    Duration,
    TriggerChance,
}

/// Multiplies every field in one stat category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAmplifier {
    pub filter: EffectFilter,
    pub category: StatCategory,
    pub multiplier: f64,
}

impl CategoryAmplifier {
    pub fn new(filter: EffectFilter, category: StatCategory, multiplier: f64) -> Self {
        CategoryAmplifier {
            filter,
            category,
            multiplier,
        }
    }
}

impl SkillInteractionEffect for CategoryAmplifier {
    fn name(&self) -> &'static str {
        "category_amplifier"
    }

    fn filter(&self) -> &EffectFilter {
        &self.filter
    }

    fn modify(&self, variant: &mut SkillStatVariant) {
        let m = self.multiplier;
        match (self.category, variant) {
            (StatCategory::Damage, v) => v.base_mut().damage *= m,
            (StatCategory::ProjectileSpeed, SkillStatVariant::Projectile(p)) => p.speed *= m,
            (StatCategory::ProjectileScale, SkillStatVariant::Projectile(p)) => p.scale *= m,
            (StatCategory::Range, SkillStatVariant::Projectile(p)) => p.range *= m,
            (StatCategory::Radius, SkillStatVariant::Projectile(p)) => p.explosion_radius *= m,
            (StatCategory::Radius, SkillStatVariant::Area(a)) => a.radius *= m,
            (StatCategory::Duration, SkillStatVariant::Area(a)) => a.persistence.duration *= m,
            (StatCategory::Duration, SkillStatVariant::Passive(p)) => p.effect_duration *= m,
            (StatCategory::TriggerChance, SkillStatVariant::Passive(p)) => p.trigger_chance *= m,
            _ => {}
        }
    }
}

/// Shortens passive cooldowns and projectile fire intervals
///
/// `reduction` is a fraction clamped to `0.0..=1.0` when applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CooldownReduction {
    pub filter: EffectFilter,
    pub reduction: f64,
}

impl CooldownReduction {
    pub fn new(filter: EffectFilter, reduction: f64) -> Self {
        CooldownReduction { filter, reduction }
    }
}

impl SkillInteractionEffect for CooldownReduction {
    fn name(&self) -> &'static str {
        "cooldown_reduction"
    }

    fn filter(&self) -> &EffectFilter {
        &self.filter
    }

    fn modify(&self, variant: &mut SkillStatVariant) {
        let factor = 1.0 - self.reduction.clamp(0.0, 1.0);
        match variant {
            SkillStatVariant::Passive(p) => p.cooldown *= factor,
            SkillStatVariant::Projectile(p) => p.fire_interval *= factor,
            SkillStatVariant::Area(_) => {}
        }
    }
}

/// Adds to a skill's elemental power
#[derive(Debug, Clone, PartialEq)]
pub struct ElementalPowerBonus {
    pub filter: EffectFilter,
    pub bonus: f64,
}

impl ElementalPowerBonus {
    pub fn new(filter: EffectFilter, bonus: f64) -> Self {
        ElementalPowerBonus { filter, bonus }
    }
}

impl SkillInteractionEffect for ElementalPowerBonus {
    fn name(&self) -> &'static str {
        "elemental_power_bonus"
    }

    fn filter(&self) -> &EffectFilter {
        &self.filter
    }

    fn modify(&self, variant: &mut SkillStatVariant) {
        variant.base_mut().elemental_power += self.bonus;
    }
}

/// Behaviours an item can switch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    Homing,
    Persistent,
}

/// Switches a behaviour on; any one source is enough
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialBehavior {
    pub filter: EffectFilter,
    pub behavior: Behavior,
}

impl SpecialBehavior {
    pub fn new(filter: EffectFilter, behavior: Behavior) -> Self {
        SpecialBehavior { filter, behavior }
    }
}

impl SkillInteractionEffect for SpecialBehavior {
    fn name(&self) -> &'static str {
        match self.behavior {
            Behavior::Homing => "homing",
            Behavior::Persistent => "persistent",
        }
    }

    fn filter(&self) -> &EffectFilter {
        &self.filter
    }

    fn modify(&self, variant: &mut SkillStatVariant) {
        match (self.behavior, variant) {
            (Behavior::Homing, SkillStatVariant::Projectile(p)) => p.is_homing = true,
            (Behavior::Persistent, SkillStatVariant::Area(a)) => a.persistence.is_persistent = true,
            _ => {}
        }
    }
}
