//! Modifier records, the per-origin ledger, and timed expiry

mod expiry;
mod ledger;
mod record;
mod store;

pub use expiry::ExpiryScheduler;
pub use ledger::ModifierLedger;
pub use record::{ModifierId, ModifierRecord};
pub use store::PermanentModifiers;

use crate::types::Origin;
use thiserror::Error;

/// Ledger operation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("origin {0:?} has no durable backing store")]
    NoBackingStore(Origin),
}

/// Anything that accepts and withdraws modifier grants by handle
pub trait ModifierTarget {
    fn add_modifier(&mut self, record: ModifierRecord) -> ModifierId;

    /// Withdraw a grant; `None` if it was already gone
    fn remove_modifier(&mut self, id: ModifierId) -> Option<ModifierRecord>;
}
