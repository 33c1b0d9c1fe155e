// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::RegistryError;
use crate::pipeline::{MediaSet, ObjectId, PipelineHandle};
use crate::registry::FactoryRegistry;

/// A populated media set plus the mapping from config ids to live handles.
pub struct Runtime {
    pub media_set: Arc<MediaSet>,
    pub pipelines: HashMap<String, PipelineHandle>,
    pub elements: HashMap<String, ObjectId>,
}

impl Runtime {
    /// Live object id of the element declared as `config_id`.
    pub fn element(&self, config_id: &str) -> Option<&ObjectId> {
        self.elements.get(config_id)
    }

    pub fn pipeline(&self, config_id: &str) -> Option<&PipelineHandle> {
        self.pipelines.get(config_id)
    }
}

/// Runtime builder - creates the media set, its pipelines and elements from
/// configuration.
///
/// # Examples
///
/// ```
/// use plugin_sample::config::{Config, FilterDefaults, RuntimeBuilder};
///
/// let config = Config {
///     defaults: FilterDefaults::default(),
///     pipelines: vec![],
///     elements: vec![],
/// };
///
/// let runtime = RuntimeBuilder::from_config(&config).unwrap();
/// assert!(runtime.elements.is_empty());
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a runtime against the builtin factory registry.
    ///
    /// The config is expected to have passed validation; a reference that
    /// still fails to resolve surfaces as a `RegistryError`.
    pub fn from_config(cfg: &Config) -> Result<Runtime, RegistryError> {
        Self::with_registry(cfg, Arc::new(FactoryRegistry::builtin()))
    }

    pub fn with_registry(cfg: &Config, registry: Arc<FactoryRegistry>) -> Result<Runtime, RegistryError> {
        let media_set = Arc::new(MediaSet::new(registry, cfg.defaults.clone()));

        let mut pipelines = HashMap::new();
        for p in &cfg.pipelines {
            let handle = media_set.create_pipeline(p.display_name());
            pipelines.insert(p.id.clone(), handle);
        }

        let mut elements = HashMap::new();
        for e in &cfg.elements {
            let pipeline = pipelines
                .get(&e.pipeline)
                .ok_or_else(|| RegistryError::PipelineNotFound(e.pipeline.clone()))?;
            let object = media_set.create_element(&e.type_name, &e.constructor_params(), pipeline)?;
            elements.insert(e.id.clone(), object.id().clone());
        }

        Ok(Runtime {
            media_set,
            pipelines,
            elements,
        })
    }
}
