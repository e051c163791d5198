//! Base template loading

use super::ConfigError;
use crate::attribute::BaseTemplate;
use crate::types::Attribute;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Container for template configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    pub templates: Vec<TemplateEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub id: String,
    /// Attribute key to base value
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

impl TemplateEntry {
    fn into_template(self) -> Result<BaseTemplate, ConfigError> {
        let mut template = BaseTemplate::new(self.id.clone());
        for (key, value) in self.values {
            let attribute: Attribute = key
                .parse()
                .map_err(|e| ConfigError::ValidationError(format!("template '{}': {}", self.id, e)))?;
            template.set(attribute, value);
        }
        Ok(template)
    }
}

fn build(config: TemplatesConfig) -> Result<HashMap<String, BaseTemplate>, ConfigError> {
    let mut map = HashMap::new();
    for entry in config.templates {
        let template = entry.into_template()?;
        map.insert(template.id.clone(), template);
    }
    Ok(map)
}

/// Load base templates from a TOML file
pub fn load_templates(path: &Path) -> Result<HashMap<String, BaseTemplate>, ConfigError> {
    build(super::load_toml(path)?)
}

/// Load base templates from a TOML string
pub fn parse_templates(content: &str) -> Result<HashMap<String, BaseTemplate>, ConfigError> {
    build(super::parse_toml(content)?)
}

/// Get the bundled base templates
pub fn default_templates() -> HashMap<String, BaseTemplate> {
    let toml = include_str!("../../config/templates.toml");
    parse_templates(toml).unwrap_or_else(|e| {
        log::warn!("bundled templates failed to load: {}", e);
        let mut map = HashMap::new();
        map.insert("default".to_string(), BaseTemplate::new("default"));
        map
    })
}
