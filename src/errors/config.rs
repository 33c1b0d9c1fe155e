// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// One or more semantic checks failed after parsing
    #[error("Configuration validation failed:\n{}", render_all(.0))]
    Invalid(Vec<ValidationError>),
}

fn render_all(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors found while validating a parsed configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Two pipelines or two elements share an id
    #[error("Duplicate {kind} id: '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// An element names a pipeline that is not declared
    #[error("Element '{element_id}' references pipeline '{pipeline_id}' which does not exist")]
    UnknownPipeline {
        element_id: String,
        pipeline_id: String,
    },

    /// An element names a type that has no registered factory
    #[error("Element '{element_id}' has unknown type '{type_name}'")]
    UnknownElementType {
        element_id: String,
        type_name: String,
    },

    /// An element names a processing backend that does not exist
    #[error("Element '{element_id}' uses unknown processor '{processor}'")]
    UnknownProcessor {
        element_id: String,
        processor: String,
    },

    /// A filter setting is outside its accepted range
    #[error("{owner}: {source}")]
    InvalidSetting {
        owner: String,
        source: super::SettingsError,
    },
}
