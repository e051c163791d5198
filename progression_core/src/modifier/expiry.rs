//! ExpiryScheduler - Removes timed grants once their duration elapses

use crate::modifier::{ModifierId, ModifierRecord, ModifierTarget};

#[derive(Debug, Clone, Copy)]
struct PendingExpiry {
    id: ModifierId,
    remaining: f64,
}

/// Tracks pending removals for temporary modifiers (buffs, debuffs, consumables)
///
/// Driven by the host's frame tick. The scheduler never owns the records;
/// it only calls back into the target with the grant handle.
#[derive(Debug, Clone, Default)]
pub struct ExpiryScheduler {
    pending: Vec<PendingExpiry>,
}

impl ExpiryScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the target and schedule its removal
    pub fn grant<T: ModifierTarget + ?Sized>(
        &mut self,
        target: &mut T,
        record: ModifierRecord,
        duration: f64,
    ) -> ModifierId {
        let id = target.add_modifier(record);
        self.schedule(id, duration);
        id
    }

    /// Schedule (or refresh) the removal of an existing grant
    pub fn schedule(&mut self, id: ModifierId, duration: f64) {
        if let Some(existing) = self.pending.iter_mut().find(|p| p.id == id) {
            existing.remaining = duration;
        } else {
            self.pending.push(PendingExpiry {
                id,
                remaining: duration,
            });
        }
    }

    /// Cancel a pending removal, returning whether one was pending
    pub fn cancel(&mut self, id: ModifierId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Time left before a grant expires
    pub fn remaining(&self, id: ModifierId) -> Option<f64> {
        self.pending.iter().find(|p| p.id == id).map(|p| p.remaining)
    }

    /// Advance time, removing every grant whose duration has elapsed
    ///
    /// Returns the handles that expired this tick. A grant that was already
    /// removed from the target is simply dropped.
    pub fn tick<T: ModifierTarget + ?Sized>(&mut self, delta: f64, target: &mut T) -> Vec<ModifierId> {
        let mut expired = Vec::new();
        self.pending.retain_mut(|p| {
            p.remaining -= delta;
            if p.remaining <= 0.0 {
                expired.push(p.id);
                false
            } else {
                true
            }
        });

        for id in &expired {
            if target.remove_modifier(*id).is_none() {
                log::debug!("expiry for {} found nothing to remove", id);
            }
        }
        expired
    }

    /// Drop every pending removal (owner destroyed)
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
