//! ModifierRecord - One contribution to one attribute

use crate::types::{Attribute, EquipmentSlot, ModifierKind, Origin};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle issued by a ledger when a record is added
///
/// Two grants with identical records still receive distinct handles, so
/// removing by handle never touches the wrong grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModifierId(pub(crate) u64);

impl ModifierId {
    /// Raw handle value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable description of one modifier
///
/// Equality is structural over every field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifierRecord {
    pub attribute: Attribute,
    pub origin: Origin,
    pub kind: ModifierKind,
    /// Flat amount for additive records, fraction (0.2 = +20%) for multiplicative ones
    pub magnitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<EquipmentSlot>,
}

impl ModifierRecord {
    /// Create a record with no slot tag
    pub fn new(attribute: Attribute, origin: Origin, kind: ModifierKind, magnitude: f64) -> Self {
        ModifierRecord {
            attribute,
            origin,
            kind,
            magnitude,
            slot: None,
        }
    }

    /// Create an additive record
    pub fn additive(attribute: Attribute, origin: Origin, magnitude: f64) -> Self {
        Self::new(attribute, origin, ModifierKind::Additive, magnitude)
    }

    /// Create a multiplicative record
    pub fn multiplicative(attribute: Attribute, origin: Origin, magnitude: f64) -> Self {
        Self::new(attribute, origin, ModifierKind::Multiplicative, magnitude)
    }

    /// Tag the record with the equipment slot that granted it
    pub fn with_slot(mut self, slot: EquipmentSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn is_additive(&self) -> bool {
        self.kind == ModifierKind::Additive
    }
}
