//! Character - Attributes, skills and equipment of one entity

use crate::attribute::{AttributeResolver, BaseValueProvider};
use crate::equipment::{EquipError, EquipmentEffectBridge, ItemDefinition};
use crate::modifier::{ModifierId, PermanentModifiers};
use crate::skill::{LevelDataSource, LevelUpError, Skill, SkillLoadout, SkillStatVariant};
use crate::types::{Attribute, EquipmentSlot, SkillId};
use std::collections::HashMap;

/// Complete progression state for one entity
///
/// Equipping an item does two independent things: its stat grants become
/// permanent modifiers in the ledger, and its interaction effects are
/// routed onto every owned skill.
#[derive(Debug)]
pub struct Character {
    pub id: String,
    stats: AttributeResolver,
    skills: SkillLoadout,
    equipment: EquipmentEffectBridge,
    item_grants: HashMap<EquipmentSlot, Vec<ModifierId>>,
    passive_grants: HashMap<SkillId, Vec<ModifierId>>,
}

impl Character {
    pub fn new(id: impl Into<String>, provider: impl BaseValueProvider + 'static) -> Self {
        Character {
            id: id.into(),
            stats: AttributeResolver::new(provider),
            skills: SkillLoadout::new(),
            equipment: EquipmentEffectBridge::new(),
            item_grants: HashMap::new(),
            passive_grants: HashMap::new(),
        }
    }

    /// Current value of one attribute
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        self.stats.get_current(attribute)
    }

    pub fn stats(&self) -> &AttributeResolver {
        &self.stats
    }

    /// Direct access for level-up, buff and consumable grants
    pub fn stats_mut(&mut self) -> &mut AttributeResolver {
        &mut self.stats
    }

    pub fn skills(&self) -> &SkillLoadout {
        &self.skills
    }

    pub fn equipment(&self) -> &EquipmentEffectBridge {
        &self.equipment
    }

    /// Effective stats of an owned skill
    pub fn skill_stats(&self, id: &SkillId) -> Option<&SkillStatVariant> {
        self.skills.effective(id)
    }

    /// Permanent modifiers in persisted shape
    pub fn permanent_modifiers(&self) -> PermanentModifiers {
        self.stats.ledger().durable()
    }

    // === Equipment ===

    /// Equip an item, returning whatever previously occupied the slot
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemDefinition) -> Result<Option<ItemDefinition>, EquipError> {
        let records = item.modifier_records(slot);
        let displaced = self.equipment.equip(slot, item, &mut self.skills)?;
        self.withdraw_item_grants(slot);

        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            ids.push(self.stats.add_permanent(record)?);
        }
        self.item_grants.insert(slot, ids);
        Ok(displaced)
    }

    /// Unequip the item in a slot, withdrawing its grants and effects
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemDefinition> {
        let item = self.equipment.unequip(slot, &mut self.skills)?;
        self.withdraw_item_grants(slot);
        Some(item)
    }

    fn withdraw_item_grants(&mut self, slot: EquipmentSlot) {
        for id in self.item_grants.remove(&slot).unwrap_or_default() {
            self.stats.remove(id);
        }
    }

    // === Skills ===

    /// Learn a skill; returns false if it is already owned
    pub fn learn_skill(&mut self, skill: Skill) -> bool {
        let id = skill.id().clone();
        if !self.skills.learn(skill, &self.equipment.active_effects()) {
            return false;
        }
        self.sync_passive(&id);
        true
    }

    /// Level up an owned skill
    pub fn level_up_skill(
        &mut self,
        id: &SkillId,
        new_level: u32,
        source: &dyn LevelDataSource,
    ) -> Result<u32, LevelUpError> {
        let level = self
            .skills
            .level_up(id, new_level, source, &self.equipment.active_effects())?;
        self.sync_passive(id);
        Ok(level)
    }

    /// Forget a skill, withdrawing any passive grants it held
    pub fn forget_skill(&mut self, id: &SkillId) -> Option<Skill> {
        let skill = self.skills.forget(id)?;
        self.withdraw_passive_grants(id);
        Some(skill)
    }

    /// Replace a passive skill's attribute grants with its current level's increases
    fn sync_passive(&mut self, id: &SkillId) {
        self.withdraw_passive_grants(id);
        let records = match self.skills.get(id).and_then(|s| s.current_variant().as_passive()) {
            Some(passive) => passive.modifiers(),
            None => return,
        };
        let ids: Vec<ModifierId> = records.into_iter().map(|r| self.stats.add(r)).collect();
        self.passive_grants.insert(id.clone(), ids);
    }

    fn withdraw_passive_grants(&mut self, id: &SkillId) {
        for grant in self.passive_grants.remove(id).unwrap_or_default() {
            self.stats.remove(grant);
        }
    }
}
