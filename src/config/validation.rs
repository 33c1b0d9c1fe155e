// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks run in a fixed order and every failure is collected, so a single
//! pass reports everything wrong with a file:
//!
//! 1. **Uniqueness**: pipeline ids and element ids are unique
//! 2. **References**: elements name a declared pipeline, a registered type
//!    and an available processor
//! 3. **Ranges**: defaults and per-element settings pass the setters' checks

use std::collections::HashSet;

use crate::backends::local::LocalProcessorFactory;
use crate::config::Config;
use crate::element::{check_edge_threshold, check_filter_type};
use crate::errors::ValidationError;
use crate::registry::FactoryRegistry;

/// Validate `cfg` against the types in `registry`.
pub fn validate_config(cfg: &Config, registry: &FactoryRegistry) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let pipeline_ids = collect_unique(cfg.pipelines.iter().map(|p| p.id.as_str()), "pipeline", &mut errors);
    collect_unique(cfg.elements.iter().map(|e| e.id.as_str()), "element", &mut errors);

    check_settings("defaults", Some(cfg.defaults.filter_type), Some(cfg.defaults.edge_threshold), &mut errors);
    if !LocalProcessorFactory::is_implementation_available(&cfg.defaults.processor) {
        errors.push(ValidationError::UnknownProcessor {
            element_id: "defaults".to_string(),
            processor: cfg.defaults.processor.clone(),
        });
    }

    for element in &cfg.elements {
        if !pipeline_ids.contains(element.pipeline.as_str()) {
            errors.push(ValidationError::UnknownPipeline {
                element_id: element.id.clone(),
                pipeline_id: element.pipeline.clone(),
            });
        }
        if !registry.contains(&element.type_name) {
            errors.push(ValidationError::UnknownElementType {
                element_id: element.id.clone(),
                type_name: element.type_name.clone(),
            });
        }
        if let Some(processor) = &element.processor {
            if !LocalProcessorFactory::is_implementation_available(processor) {
                errors.push(ValidationError::UnknownProcessor {
                    element_id: element.id.clone(),
                    processor: processor.clone(),
                });
            }
        }
        check_settings(&element.id, element.filter_type, element.edge_threshold, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &'static str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    seen
}

fn check_settings(
    owner: &str,
    filter_type: Option<i32>,
    edge_threshold: Option<i32>,
    errors: &mut Vec<ValidationError>,
) {
    let checks = [
        filter_type.map(check_filter_type),
        edge_threshold.map(check_edge_threshold),
    ];
    for source in checks.into_iter().flatten().filter_map(Result::err) {
        errors.push(ValidationError::InvalidSetting {
            owner: owner.to_string(),
            source,
        });
    }
}
