//! AttributeValue - The two-layer modifier container (Additive → Multiplicative)

use crate::modifier::ModifierRecord;
use crate::types::ModifierKind;
use serde::{Deserialize, Serialize};

/// Breakdown of one attribute into its composition layers
///
/// Final value is calculated as:
/// `(base + additive) × Π(1 + multiplier)`
///
/// - `base`: The base value (from the character template)
/// - `additive`: Sum of all additive records
/// - `multipliers`: Every multiplicative record's magnitude, each applied as its own factor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub base: f64,
    pub additive: f64,
    pub multipliers: Vec<f64>,
}

impl AttributeValue {
    /// Create a new AttributeValue with the given base
    pub fn with_base(base: f64) -> Self {
        AttributeValue {
            base,
            additive: 0.0,
            multipliers: Vec::new(),
        }
    }

    /// Build from a base value and the records targeting that attribute
    pub fn from_records<'a>(base: f64, records: impl IntoIterator<Item = &'a ModifierRecord>) -> Self {
        let mut value = Self::with_base(base);
        for record in records {
            value.push(record);
        }
        value
    }

    /// Fold one record into the matching layer
    pub fn push(&mut self, record: &ModifierRecord) {
        match record.kind {
            ModifierKind::Additive => self.additive += record.magnitude,
            ModifierKind::Multiplicative => self.multipliers.push(record.magnitude),
        }
    }

    /// Calculate final value: (base + additive) × Π(1 + multiplier)
    pub fn compute(&self) -> f64 {
        self.total_additive() * self.total_multiplier()
    }

    /// Base plus every additive contribution
    pub fn total_additive(&self) -> f64 {
        self.base + self.additive
    }

    /// Product of every multiplicative factor
    pub fn total_multiplier(&self) -> f64 {
        self.multipliers.iter().map(|m| 1.0 + m).product()
    }
}
