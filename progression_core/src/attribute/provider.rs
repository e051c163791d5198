//! Base-value providers - Where an attribute's unmodified value comes from

use crate::types::Attribute;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supplies the base value of each attribute for one character
pub trait BaseValueProvider {
    fn base(&self, attribute: Attribute) -> f64;
}

impl<F> BaseValueProvider for F
where
    F: Fn(Attribute) -> f64,
{
    fn base(&self, attribute: Attribute) -> f64 {
        self(attribute)
    }
}

/// A character's base template
///
/// Attributes not listed use [`Attribute::default_base`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseTemplate {
    pub id: String,
    values: BTreeMap<Attribute, f64>,
}

impl BaseTemplate {
    /// Create a template with only built-in defaults
    pub fn new(id: impl Into<String>) -> Self {
        BaseTemplate {
            id: id.into(),
            values: BTreeMap::new(),
        }
    }

    /// Override one attribute's base value
    pub fn with(mut self, attribute: Attribute, value: f64) -> Self {
        self.values.insert(attribute, value);
        self
    }

    pub fn set(&mut self, attribute: Attribute, value: f64) {
        self.values.insert(attribute, value);
    }

    /// Attributes explicitly set on this template
    pub fn overrides(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.values.iter().map(|(a, v)| (*a, *v))
    }
}

impl BaseValueProvider for BaseTemplate {
    fn base(&self, attribute: Attribute) -> f64 {
        self.values
            .get(&attribute)
            .copied()
            .unwrap_or_else(|| attribute.default_base())
    }
}
