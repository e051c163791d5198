//! Attribute resolution - Base value plus every active modifier

mod provider;
mod resolver;
mod value;

pub use provider::{BaseTemplate, BaseValueProvider};
pub use resolver::AttributeResolver;
pub use value::AttributeValue;
