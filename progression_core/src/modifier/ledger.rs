//! ModifierLedger - Active modifier records grouped by origin

use crate::modifier::{LedgerError, ModifierId, ModifierRecord, ModifierTarget, PermanentModifiers};
use crate::types::{Attribute, Origin};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    id: ModifierId,
    record: ModifierRecord,
}

/// Owns every active modifier record, per origin
///
/// Permanent origins additionally keep a durable list that mirrors every
/// grant added or removed by handle or by match, so toggling an origin off
/// and on reproduces its active list. `clear` only touches the active list;
/// the durable list has to be cleared separately with `clear_durable` (or
/// both at once with `clear_permanent`).
#[derive(Debug, Clone, Default)]
pub struct ModifierLedger {
    active: BTreeMap<Origin, Vec<Entry>>,
    durable: BTreeMap<Origin, Vec<Entry>>,
    disabled: BTreeSet<Origin>,
    next_id: u64,
}

impl ModifierLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a ledger from a persisted store, activating every record
    pub fn with_durable(store: &PermanentModifiers) -> Self {
        let mut ledger = Self::new();
        for (origin, records) in store.iter() {
            for record in records {
                let entry = Entry {
                    id: ledger.issue_id(),
                    record: *record,
                };
                ledger.durable.entry(origin).or_default().push(entry);
                ledger.active.entry(origin).or_default().push(entry);
            }
        }
        log::debug!("restored ledger with {} permanent modifiers", ledger.len());
        ledger
    }

    fn issue_id(&mut self) -> ModifierId {
        let id = ModifierId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a record to its origin's active list
    ///
    /// No deduplication: adding the same record twice yields two grants.
    /// Records under a permanent origin also go to the durable store; while
    /// that origin is disabled they only land there and become active on
    /// re-enable.
    pub fn add(&mut self, record: ModifierRecord) -> ModifierId {
        let entry = Entry {
            id: self.issue_id(),
            record,
        };
        if record.origin.is_permanent() {
            self.durable.entry(record.origin).or_default().push(entry);
        }
        if self.is_enabled(record.origin) {
            self.active.entry(record.origin).or_default().push(entry);
        }
        log::debug!("added modifier {} {:?}", entry.id, record);
        entry.id
    }

    /// Like [`add`](Self::add), but rejects origins without a durable store
    pub fn add_permanent(&mut self, record: ModifierRecord) -> Result<ModifierId, LedgerError> {
        if !record.origin.is_permanent() {
            return Err(LedgerError::NoBackingStore(record.origin));
        }
        Ok(self.add(record))
    }

    /// Remove one grant by handle, from the active list and the durable store
    ///
    /// Returns `None` when the handle is unknown or already removed.
    pub fn remove(&mut self, id: ModifierId) -> Option<ModifierRecord> {
        let active = take_entry(&mut self.active, id);
        let durable = take_entry(&mut self.durable, id);
        let removed = active.or(durable);
        if let Some(record) = removed {
            log::debug!("removed modifier {} {:?}", id, record);
        }
        removed
    }

    /// Remove the first active record structurally equal to `record`
    ///
    /// The same grant is dropped from the durable store, so it stays gone
    /// across a disable/enable cycle. Absence is not an error: the grant may
    /// already have expired.
    pub fn remove_matching(&mut self, record: &ModifierRecord) -> bool {
        let Some(entries) = self.active.get_mut(&record.origin) else {
            return false;
        };
        let Some(pos) = entries.iter().position(|e| e.record == *record) else {
            return false;
        };
        let id = entries.remove(pos).id;
        take_entry(&mut self.durable, id);
        true
    }

    /// Drop every active record for an origin, returning how many were removed
    pub fn clear(&mut self, origin: Origin) -> usize {
        let removed = self.active.remove(&origin).map(|e| e.len()).unwrap_or(0);
        if removed > 0 {
            log::debug!("cleared {} active modifiers from {:?}", removed, origin);
        }
        removed
    }

    /// Drop the durable list for an origin
    pub fn clear_durable(&mut self, origin: Origin) -> usize {
        self.durable.remove(&origin).map(|e| e.len()).unwrap_or(0)
    }

    /// Drop both the active and the durable list for an origin
    pub fn clear_permanent(&mut self, origin: Origin) -> usize {
        self.clear_durable(origin);
        self.clear(origin)
    }

    /// Toggle an origin's contributions
    ///
    /// Disabling clears the active list; re-enabling repopulates it from the
    /// durable store. Setting the current state again is a no-op. Only
    /// origins with a durable store can be toggled.
    pub fn set_enabled(&mut self, origin: Origin, enabled: bool) -> Result<(), LedgerError> {
        if !origin.is_permanent() {
            return Err(LedgerError::NoBackingStore(origin));
        }
        if enabled == self.is_enabled(origin) {
            return Ok(());
        }
        if enabled {
            let restored = self.durable.get(&origin).cloned().unwrap_or_default();
            self.active.insert(origin, restored);
            self.disabled.remove(&origin);
        } else {
            self.active.remove(&origin);
            self.disabled.insert(origin);
        }
        log::debug!("origin {:?} enabled={}", origin, enabled);
        Ok(())
    }

    pub fn is_enabled(&self, origin: Origin) -> bool {
        !self.disabled.contains(&origin)
    }

    /// Copy of an origin's active records
    pub fn snapshot(&self, origin: Origin) -> Vec<ModifierRecord> {
        self.active
            .get(&origin)
            .map(|entries| entries.iter().map(|e| e.record).collect())
            .unwrap_or_default()
    }

    /// Look up an active record by handle
    pub fn get(&self, id: ModifierId) -> Option<&ModifierRecord> {
        self.active
            .values()
            .flatten()
            .find(|e| e.id == id)
            .map(|e| &e.record)
    }

    /// Every active record, across all origins
    pub fn records(&self) -> impl Iterator<Item = &ModifierRecord> {
        self.active.values().flatten().map(|e| &e.record)
    }

    /// Every active record targeting one attribute
    pub fn records_for(&self, attribute: Attribute) -> impl Iterator<Item = &ModifierRecord> {
        self.records().filter(move |r| r.attribute == attribute)
    }

    /// Current durable store, in persisted shape
    pub fn durable(&self) -> PermanentModifiers {
        PermanentModifiers::from_durable(
            self.durable
                .iter()
                .filter(|(_, entries)| !entries.is_empty())
                .map(|(origin, entries)| (*origin, entries.iter().map(|e| e.record).collect()))
                .collect(),
        )
    }

    /// Number of active records
    pub fn len(&self) -> usize {
        self.active.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ModifierTarget for ModifierLedger {
    fn add_modifier(&mut self, record: ModifierRecord) -> ModifierId {
        self.add(record)
    }

    fn remove_modifier(&mut self, id: ModifierId) -> Option<ModifierRecord> {
        self.remove(id)
    }
}

fn take_entry(lists: &mut BTreeMap<Origin, Vec<Entry>>, id: ModifierId) -> Option<ModifierRecord> {
    for entries in lists.values_mut() {
        if let Some(pos) = entries.iter().position(|e| e.id == id) {
            return Some(entries.remove(pos).record);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EquipmentSlot;

    fn sword_damage() -> ModifierRecord {
        ModifierRecord::additive(Attribute::Damage, Origin::EquipmentWeapon, 6.0)
            .with_slot(EquipmentSlot::Weapon)
    }

    #[test]
    fn test_add_does_not_dedup() {
        let mut ledger = ModifierLedger::new();
        let buff = ModifierRecord::multiplicative(Attribute::Damage, Origin::Buff, 0.1);
        let a = ledger.add(buff);
        let b = ledger.add(buff);
        assert_ne!(a, b);
        assert_eq!(ledger.snapshot(Origin::Buff), vec![buff, buff]);
    }

    #[test]
    fn test_remove_by_id_targets_exact_grant() {
        let mut ledger = ModifierLedger::new();
        let buff = ModifierRecord::multiplicative(Attribute::Damage, Origin::Buff, 0.1);
        let first = ledger.add(buff);
        let second = ledger.add(buff);

        assert_eq!(ledger.remove(first), Some(buff));
        assert!(ledger.get(first).is_none());
        assert!(ledger.get(second).is_some());
        assert_eq!(ledger.remove(first), None);
    }

    #[test]
    fn test_remove_matching_absent_is_noop() {
        let mut ledger = ModifierLedger::new();
        let kept = ModifierRecord::additive(Attribute::Health, Origin::LevelUp, 10.0);
        ledger.add(kept);

        let never_added = ModifierRecord::additive(Attribute::Health, Origin::LevelUp, 11.0);
        assert!(!ledger.remove_matching(&never_added));
        assert!(!ledger.remove_matching(&ModifierRecord::additive(Attribute::Luck, Origin::Buff, 1.0)));
        assert_eq!(ledger.snapshot(Origin::LevelUp), vec![kept]);
    }

    #[test]
    fn test_remove_matching_removes_first_only() {
        let mut ledger = ModifierLedger::new();
        let record = ModifierRecord::additive(Attribute::Dodge, Origin::Consumable, 2.0);
        ledger.add(record);
        ledger.add(record);
        assert!(ledger.remove_matching(&record));
        assert_eq!(ledger.snapshot(Origin::Consumable).len(), 1);
    }

    #[test]
    fn test_clear_leaves_durable_store() {
        let mut ledger = ModifierLedger::new();
        ledger.add_permanent(sword_damage()).unwrap();

        assert_eq!(ledger.clear(Origin::EquipmentWeapon), 1);
        assert!(ledger.snapshot(Origin::EquipmentWeapon).is_empty());
        assert_eq!(ledger.durable().records(Origin::EquipmentWeapon), &[sword_damage()]);

        ledger.clear_permanent(Origin::EquipmentWeapon);
        assert!(ledger.durable().is_empty());
    }

    #[test]
    fn test_toggle_restores_active_list() {
        let mut ledger = ModifierLedger::new();
        let id = ledger.add_permanent(sword_damage()).unwrap();
        let before = ledger.snapshot(Origin::EquipmentWeapon);

        ledger.set_enabled(Origin::EquipmentWeapon, false).unwrap();
        assert!(ledger.snapshot(Origin::EquipmentWeapon).is_empty());
        assert!(!ledger.is_enabled(Origin::EquipmentWeapon));

        ledger.set_enabled(Origin::EquipmentWeapon, true).unwrap();
        assert_eq!(ledger.snapshot(Origin::EquipmentWeapon), before);
        assert!(ledger.get(id).is_some());
    }

    #[test]
    fn test_toggle_rejects_transient_origin() {
        let mut ledger = ModifierLedger::new();
        let buff = ModifierRecord::multiplicative(Attribute::MoveSpeed, Origin::Buff, 0.3);
        ledger.add(buff);
        assert!(matches!(
            ledger.set_enabled(Origin::Buff, false),
            Err(LedgerError::NoBackingStore(Origin::Buff))
        ));
        assert_eq!(ledger.snapshot(Origin::Buff), vec![buff]);
    }

    #[test]
    fn test_permanent_add_while_disabled_waits_for_enable() {
        let mut ledger = ModifierLedger::new();
        ledger.set_enabled(Origin::EquipmentArmor, false).unwrap();
        let plate = ModifierRecord::additive(Attribute::Defense, Origin::EquipmentArmor, 12.0);
        ledger.add_permanent(plate).unwrap();
        assert!(ledger.snapshot(Origin::EquipmentArmor).is_empty());

        ledger.set_enabled(Origin::EquipmentArmor, true).unwrap();
        assert_eq!(ledger.snapshot(Origin::EquipmentArmor), vec![plate]);
    }

    #[test]
    fn test_remove_drops_durable_entry() {
        let mut ledger = ModifierLedger::new();
        let id = ledger.add_permanent(sword_damage()).unwrap();
        ledger.set_enabled(Origin::EquipmentWeapon, false).unwrap();

        assert_eq!(ledger.remove(id), Some(sword_damage()));
        ledger.set_enabled(Origin::EquipmentWeapon, true).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_plain_add_on_permanent_origin_survives_toggle() {
        let mut ledger = ModifierLedger::new();
        ledger.add_permanent(sword_damage()).unwrap();
        let honed = ModifierRecord::multiplicative(Attribute::Damage, Origin::EquipmentWeapon, 0.2);
        let id = ledger.add(honed);
        let before = ledger.snapshot(Origin::EquipmentWeapon);

        ledger.set_enabled(Origin::EquipmentWeapon, false).unwrap();
        ledger.set_enabled(Origin::EquipmentWeapon, true).unwrap();
        assert_eq!(ledger.snapshot(Origin::EquipmentWeapon), before);
        assert!(ledger.get(id).is_some());
    }

    #[test]
    fn test_enable_when_already_enabled_is_noop() {
        let mut ledger = ModifierLedger::new();
        let plate = ModifierRecord::additive(Attribute::Defense, Origin::EquipmentArmor, 5.0);
        ledger.add(plate);

        ledger.set_enabled(Origin::EquipmentArmor, true).unwrap();
        assert_eq!(ledger.snapshot(Origin::EquipmentArmor), vec![plate]);

        ledger.set_enabled(Origin::EquipmentArmor, false).unwrap();
        ledger.set_enabled(Origin::EquipmentArmor, false).unwrap();
        ledger.set_enabled(Origin::EquipmentArmor, true).unwrap();
        assert_eq!(ledger.snapshot(Origin::EquipmentArmor), vec![plate]);
    }

    #[test]
    fn test_remove_matching_stays_removed_across_toggle() {
        let mut ledger = ModifierLedger::new();
        ledger.add_permanent(sword_damage()).unwrap();
        assert!(ledger.remove_matching(&sword_damage()));

        ledger.set_enabled(Origin::EquipmentWeapon, false).unwrap();
        ledger.set_enabled(Origin::EquipmentWeapon, true).unwrap();
        assert!(ledger.is_empty());
        assert!(ledger.durable().is_empty());
    }

    #[test]
    fn test_with_durable_activates_records() {
        let mut store = PermanentModifiers::new();
        store.push(sword_damage()).unwrap();
        let ledger = ModifierLedger::with_durable(&store);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.durable(), store);
    }
}
