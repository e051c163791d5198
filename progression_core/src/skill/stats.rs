//! Skill stat shapes - One parameter set per archetype over a shared base

use crate::modifier::ModifierRecord;
use crate::types::{Attribute, Element, Origin, SkillArchetype};
use serde::{Deserialize, Serialize};

/// Fields every skill carries regardless of archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSkillStat {
    /// Damage per hit before resistances
    pub damage: f64,
    /// Level these stats describe (1-based)
    pub level: u32,
    /// Highest level the skill can reach
    pub max_level: u32,
    pub element: Element,
    /// Added to element-specific effects (status strength, bonus vs. weak targets)
    pub elemental_power: f64,
}

impl Default for BaseSkillStat {
    fn default() -> Self {
        BaseSkillStat {
            damage: 10.0,
            level: 1,
            max_level: 5,
            element: Element::Neutral,
            elemental_power: 0.0,
        }
    }
}

/// Stats for skills that fire projectiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileStats {
    pub base: BaseSkillStat,
    /// Travel speed in units per second
    pub speed: f64,
    /// Visual and hitbox scale (1.0 = normal)
    pub scale: f64,
    /// Seconds between volleys
    pub fire_interval: f64,
    /// Extra targets a projectile passes through
    pub pierce_count: u32,
    /// Distance travelled before despawning
    pub range: f64,
    /// Radius in which a homing projectile acquires targets
    pub homing_range: f64,
    pub is_homing: bool,
    /// Zero means the projectile does not explode
    pub explosion_radius: f64,
    /// Projectiles per volley
    pub projectile_count: u32,
    /// Seconds between projectiles within one volley
    pub inner_interval: f64,
}

impl Default for ProjectileStats {
    fn default() -> Self {
        ProjectileStats {
            base: BaseSkillStat::default(),
            speed: 10.0,
            scale: 1.0,
            fire_interval: 1.0,
            pierce_count: 0,
            range: 8.0,
            homing_range: 0.0,
            is_homing: false,
            explosion_radius: 0.0,
            projectile_count: 1,
            inner_interval: 0.1,
        }
    }
}

/// Lingering behaviour of an area skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Persistence {
    /// Whether the area stays on the ground after casting
    pub is_persistent: bool,
    /// Seconds the area lingers
    pub duration: f64,
    /// Seconds between damage ticks while lingering
    pub tick_interval: f64,
}

impl Default for Persistence {
    fn default() -> Self {
        Persistence {
            is_persistent: false,
            duration: 0.0,
            tick_interval: 0.5,
        }
    }
}

/// Stats for skills that hit everything in a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaStats {
    pub base: BaseSkillStat,
    pub radius: f64,
    /// Damage ticks per second
    pub tick_rate: f64,
    /// Drift speed of the area; 0.0 keeps it in place
    pub move_speed: f64,
    pub persistence: Persistence,
}

impl Default for AreaStats {
    fn default() -> Self {
        AreaStats {
            base: BaseSkillStat::default(),
            radius: 2.0,
            tick_rate: 1.0,
            move_speed: 0.0,
            persistence: Persistence::default(),
        }
    }
}

/// A named percent increase granted by a passive skill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentIncrease {
    pub attribute: Attribute,
    /// Fraction, 0.1 = +10%
    pub amount: f64,
}

/// Stats for always-on or triggered passive skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveStats {
    pub base: BaseSkillStat,
    /// Chance to trigger on its condition, 0.0..=1.0
    pub trigger_chance: f64,
    /// Seconds before it can trigger again
    pub cooldown: f64,
    /// Seconds a triggered effect lasts
    pub effect_duration: f64,
    /// Attribute increases granted while the skill is owned
    pub percent_increases: Vec<PercentIncrease>,
}

impl Default for PassiveStats {
    fn default() -> Self {
        PassiveStats {
            base: BaseSkillStat::default(),
            trigger_chance: 1.0,
            cooldown: 0.0,
            effect_duration: 0.0,
            percent_increases: Vec::new(),
        }
    }
}

impl PassiveStats {
    /// The percent increases as multiplicative records under [`Origin::Passive`]
    pub fn modifiers(&self) -> Vec<ModifierRecord> {
        self.percent_increases
            .iter()
            .map(|p| ModifierRecord::multiplicative(p.attribute, Origin::Passive, p.amount))
            .collect()
    }
}

/// Per-level stats of one skill, shaped by its archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "archetype", rename_all = "snake_case")]
pub enum SkillStatVariant {
    Projectile(ProjectileStats),
    Area(AreaStats),
    Passive(PassiveStats),
}

impl SkillStatVariant {
    /// Default-valued variant for an archetype
    pub fn default_for(archetype: SkillArchetype) -> Self {
        match archetype {
            SkillArchetype::Projectile => SkillStatVariant::Projectile(ProjectileStats::default()),
            SkillArchetype::Area => SkillStatVariant::Area(AreaStats::default()),
            SkillArchetype::Passive => SkillStatVariant::Passive(PassiveStats::default()),
        }
    }

    pub fn archetype(&self) -> SkillArchetype {
        match self {
            SkillStatVariant::Projectile(_) => SkillArchetype::Projectile,
            SkillStatVariant::Area(_) => SkillArchetype::Area,
            SkillStatVariant::Passive(_) => SkillArchetype::Passive,
        }
    }

    pub fn base(&self) -> &BaseSkillStat {
        match self {
            SkillStatVariant::Projectile(p) => &p.base,
            SkillStatVariant::Area(a) => &a.base,
            SkillStatVariant::Passive(p) => &p.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseSkillStat {
        match self {
            SkillStatVariant::Projectile(p) => &mut p.base,
            SkillStatVariant::Area(a) => &mut a.base,
            SkillStatVariant::Passive(p) => &mut p.base,
        }
    }

    pub fn as_projectile(&self) -> Option<&ProjectileStats> {
        match self {
            SkillStatVariant::Projectile(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_area(&self) -> Option<&AreaStats> {
        match self {
            SkillStatVariant::Area(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_passive(&self) -> Option<&PassiveStats> {
        match self {
            SkillStatVariant::Passive(p) => Some(p),
            _ => None,
        }
    }
}
