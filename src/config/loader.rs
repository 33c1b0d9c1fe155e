// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_EDGE_THRESHOLD, DEFAULT_FILTER_TYPE, DEFAULT_PROCESSOR};
use crate::errors::ConfigError;
use crate::registry::FactoryRegistry;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Main configuration structure for a plugin-sample session.
///
/// Describes the module-wide filter defaults, the pipelines to create, and
/// the elements to place in them. It is typically loaded from a YAML file.
///
/// # Fields
/// * `defaults` - Settings used when an element does not override them (optional)
/// * `pipelines` - Pipelines to create, referenced by elements through their `id`
/// * `elements` - Elements to construct, each inside one pipeline
///
/// # Example
/// ```yaml
/// defaults:
///   filter_type: 0
///   edge_threshold: 125
/// pipelines:
///   - id: main
/// elements:
///   - id: edges
///     type: PluginSampleFilter
///     pipeline: main
///     edge_threshold: 60
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: FilterDefaults,
    #[serde(default)]
    pub pipelines: Vec<PipelineConfig>,
    #[serde(default)]
    pub elements: Vec<ElementConfig>,
}

/// Module-wide defaults handed to every filter factory.
///
/// # Fields
/// * `filter_type` - Filter mode, 0 for edges, 1 for grayscale (defaults to 0)
/// * `edge_threshold` - Edge-detection threshold in 0..=255 (defaults to 125)
/// * `processor` - Local processing backend (defaults to `opencv_sample`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterDefaults {
    pub filter_type: i32,
    pub edge_threshold: i32,
    pub processor: String,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            filter_type: DEFAULT_FILTER_TYPE,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            processor: DEFAULT_PROCESSOR.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub id: String,
    /// Display name; the `id` is used when absent.
    pub name: Option<String>,
}

impl PipelineConfig {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Configuration for a single element.
///
/// # Fields
/// * `id` - Unique identifier for this element within the config
/// * `type_name` - Registered type to construct (YAML key `type`)
/// * `pipeline` - `id` of the pipeline that hosts the element
/// * `processor` - Backend override
/// * `name` - Element name override
/// * `filter_type` / `edge_threshold` - Setting overrides
///
/// # Example
/// ```yaml
/// id: "gray"
/// type: PluginSampleFilter
/// pipeline: main
/// filter_type: 1
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub pipeline: String,
    pub processor: Option<String>,
    pub name: Option<String>,
    pub filter_type: Option<i32>,
    pub edge_threshold: Option<i32>,
}

impl ElementConfig {
    /// Constructor parameters in the host's wire shape. Only overrides are
    /// included; the factory fills the rest from the module defaults.
    pub fn constructor_params(&self) -> Value {
        let mut params = Map::new();
        params.insert(
            "name".to_string(),
            Value::from(self.name.as_deref().unwrap_or(&self.id)),
        );
        if let Some(processor) = &self.processor {
            params.insert("processor".to_string(), Value::from(processor.as_str()));
        }
        if let Some(filter_type) = self.filter_type {
            params.insert("filterType".to_string(), Value::from(filter_type));
        }
        if let Some(edge_threshold) = self.edge_threshold {
            params.insert("edgeThreshold".to_string(), Value::from(edge_threshold));
        }
        Value::Object(params)
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Validation runs against the builtin factory registry: ids must be
/// unique, references must resolve, and every setting must be in range.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg, &FactoryRegistry::builtin()).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
pipelines:
  - id: main
elements:
  - id: edges
    type: PluginSampleFilter
    pipeline: main
    edge_threshold: 60
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.defaults, FilterDefaults::default());
        assert_eq!(cfg.pipelines.len(), 1);
        assert_eq!(cfg.elements[0].type_name, "PluginSampleFilter");
        assert_eq!(cfg.elements[0].edge_threshold, Some(60));
        assert_eq!(cfg.elements[0].filter_type, None);
    }

    #[test]
    fn test_partial_defaults_override() {
        let yaml = r#"
defaults:
  edge_threshold: 40
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.defaults.edge_threshold, 40);
        assert_eq!(cfg.defaults.filter_type, 0);
        assert_eq!(cfg.defaults.processor, "opencv_sample");
        assert!(cfg.elements.is_empty());
    }

    #[test]
    fn test_misspelled_keys_are_rejected() {
        let element_typo = r#"
pipelines:
  - id: main
elements:
  - id: edges
    type: PluginSampleFilter
    pipeline: main
    edge_treshold: 10
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(element_typo.as_bytes()).unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("edge_treshold"));

        let defaults_typo = r#"
defaults:
  filter_typ: 1
"#;
        assert!(serde_yaml::from_str::<Config>(defaults_typo).is_err());
    }

    #[test]
    fn test_constructor_params_only_carry_overrides() {
        let element = ElementConfig {
            id: "gray".to_string(),
            type_name: "PluginSampleFilter".to_string(),
            pipeline: "main".to_string(),
            processor: None,
            name: None,
            filter_type: Some(1),
            edge_threshold: None,
        };

        assert_eq!(
            element.constructor_params(),
            json!({"name": "gray", "filterType": 1})
        );
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let yaml = r#"
pipelines:
  - id: main
    name: Main pipeline
elements:
  - id: edges
    type: PluginSampleFilter
    pipeline: main
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.pipelines[0].display_name(), "Main pipeline");
    }

    #[test]
    fn test_load_and_validate_unknown_pipeline() {
        let yaml = r#"
pipelines:
  - id: main
elements:
  - id: edges
    type: PluginSampleFilter
    pipeline: side
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let error_msg = load_and_validate_config(file.path()).unwrap_err().to_string();
        assert!(error_msg.contains("Configuration validation failed"));
        assert!(error_msg.contains("references pipeline 'side' which does not exist"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"elements: {not: [a, list").unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }
}
