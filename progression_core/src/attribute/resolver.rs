//! AttributeResolver - Current attribute values from base template and ledger

use crate::attribute::{AttributeValue, BaseValueProvider};
use crate::modifier::{LedgerError, ModifierId, ModifierLedger, ModifierRecord, ModifierTarget};
use crate::types::{Attribute, Origin};
use std::cell::{Cell, RefCell};
use std::fmt;

/// Resolves every attribute from an injected base provider and an owned ledger
///
/// Mutations go through the resolver and mark the cached table dirty; the
/// next read recomputes it. Reads therefore never observe a stale value.
pub struct AttributeResolver {
    provider: Box<dyn BaseValueProvider>,
    ledger: ModifierLedger,
    cache: RefCell<[f64; Attribute::COUNT]>,
    dirty: Cell<bool>,
}

impl fmt::Debug for AttributeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeResolver")
            .field("ledger", &self.ledger)
            .field("dirty", &self.dirty.get())
            .finish_non_exhaustive()
    }
}

impl AttributeResolver {
    /// Create a resolver with an empty ledger
    pub fn new(provider: impl BaseValueProvider + 'static) -> Self {
        Self::with_ledger(provider, ModifierLedger::new())
    }

    /// Create a resolver over an existing ledger (e.g. restored from a save)
    pub fn with_ledger(provider: impl BaseValueProvider + 'static, ledger: ModifierLedger) -> Self {
        AttributeResolver {
            provider: Box::new(provider),
            ledger,
            cache: RefCell::new([0.0; Attribute::COUNT]),
            dirty: Cell::new(true),
        }
    }

    /// Swap the base provider (e.g. class change)
    pub fn set_provider(&mut self, provider: impl BaseValueProvider + 'static) {
        self.provider = Box::new(provider);
        self.mark_dirty();
    }

    fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Recompute every attribute from scratch
    pub fn recompute(&self) {
        let mut values: Vec<AttributeValue> = Attribute::all()
            .iter()
            .map(|a| AttributeValue::with_base(self.provider.base(*a)))
            .collect();
        for record in self.ledger.records() {
            values[record.attribute.index()].push(record);
        }

        let mut cache = self.cache.borrow_mut();
        for (slot, value) in cache.iter_mut().zip(&values) {
            *slot = value.compute();
        }
        self.dirty.set(false);
        log::debug!("recomputed attributes from {} modifiers", self.ledger.len());
    }

    /// Current value of one attribute
    pub fn get_current(&self, attribute: Attribute) -> f64 {
        if self.dirty.get() {
            self.recompute();
        }
        self.cache.borrow()[attribute.index()]
    }

    /// Every attribute with its current value
    pub fn current_values(&self) -> Vec<(Attribute, f64)> {
        Attribute::all()
            .iter()
            .map(|a| (*a, self.get_current(*a)))
            .collect()
    }

    /// Layer-by-layer breakdown of one attribute, for display
    pub fn breakdown(&self, attribute: Attribute) -> AttributeValue {
        AttributeValue::from_records(
            self.provider.base(attribute),
            self.ledger.records_for(attribute),
        )
    }

    pub fn ledger(&self) -> &ModifierLedger {
        &self.ledger
    }

    /// Mutable ledger access; the cache is assumed invalidated
    pub fn ledger_mut(&mut self) -> &mut ModifierLedger {
        self.mark_dirty();
        &mut self.ledger
    }

    // === Ledger mutations ===

    pub fn add(&mut self, record: ModifierRecord) -> ModifierId {
        self.ledger_mut().add(record)
    }

    pub fn add_permanent(&mut self, record: ModifierRecord) -> Result<ModifierId, LedgerError> {
        self.ledger_mut().add_permanent(record)
    }

    pub fn remove(&mut self, id: ModifierId) -> Option<ModifierRecord> {
        self.ledger_mut().remove(id)
    }

    pub fn remove_matching(&mut self, record: &ModifierRecord) -> bool {
        self.ledger_mut().remove_matching(record)
    }

    pub fn clear(&mut self, origin: Origin) -> usize {
        self.ledger_mut().clear(origin)
    }

    pub fn clear_permanent(&mut self, origin: Origin) -> usize {
        self.ledger_mut().clear_permanent(origin)
    }

    pub fn set_enabled(&mut self, origin: Origin, enabled: bool) -> Result<(), LedgerError> {
        self.ledger_mut().set_enabled(origin, enabled)
    }
}

impl ModifierTarget for AttributeResolver {
    fn add_modifier(&mut self, record: ModifierRecord) -> ModifierId {
        self.add(record)
    }

    fn remove_modifier(&mut self, id: ModifierId) -> Option<ModifierRecord> {
        self.remove(id)
    }
}
