//! EquipmentEffectBridge - Routes equipped items' effects onto owned skills

use crate::equipment::{build_effects, EquipError, ItemDefinition, SkillInteractionEffect};
use crate::skill::SkillLoadout;
use crate::types::EquipmentSlot;

#[derive(Debug)]
struct EquippedItem {
    slot: EquipmentSlot,
    item: ItemDefinition,
    effects: Vec<Box<dyn SkillInteractionEffect>>,
}

/// Equipped items in equip order, with the interaction effects each one grants
///
/// Every equip or unequip re-derives all effective skill stats from the
/// skills' resolved variants, so removing an item fully retracts its effects.
#[derive(Debug, Default)]
pub struct EquipmentEffectBridge {
    equipped: Vec<EquippedItem>,
}

impl EquipmentEffectBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip an item, returning whatever previously occupied the slot
    pub fn equip(
        &mut self,
        slot: EquipmentSlot,
        item: ItemDefinition,
        loadout: &mut SkillLoadout,
    ) -> Result<Option<ItemDefinition>, EquipError> {
        if !item.kind.fits(slot) {
            return Err(EquipError::SlotMismatch { kind: item.kind, slot });
        }
        let displaced = self.take(slot);
        let effects = build_effects(&item);
        log::debug!("equipped {} in {:?} with {} effects", item.id, slot, effects.len());
        self.equipped.push(EquippedItem { slot, item, effects });
        self.reapply(loadout);
        Ok(displaced)
    }

    /// Remove the item in a slot and retract its effects
    pub fn unequip(&mut self, slot: EquipmentSlot, loadout: &mut SkillLoadout) -> Option<ItemDefinition> {
        let removed = self.take(slot)?;
        log::debug!("unequipped {} from {:?}", removed.id, slot);
        self.reapply(loadout);
        Some(removed)
    }

    /// Re-derive every owned skill's effective stats from the current effect set
    pub fn reapply(&self, loadout: &mut SkillLoadout) {
        loadout.refresh_effective(&self.active_effects());
    }

    /// All effects of all equipped items, in equip order
    pub fn active_effects(&self) -> Vec<&dyn SkillInteractionEffect> {
        self.equipped
            .iter()
            .flat_map(|e| e.effects.iter().map(|b| b.as_ref()))
            .collect()
    }

    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&ItemDefinition> {
        self.equipped.iter().find(|e| e.slot == slot).map(|e| &e.item)
    }

    /// Equipped items in equip order
    pub fn all_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &ItemDefinition)> {
        self.equipped.iter().map(|e| (e.slot, &e.item))
    }

    fn take(&mut self, slot: EquipmentSlot) -> Option<ItemDefinition> {
        let pos = self.equipped.iter().position(|e| e.slot == slot)?;
        Some(self.equipped.remove(pos).item)
    }
}
