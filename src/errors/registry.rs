// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the factory registry and the media set.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("type '{0}' is already registered")]
    DuplicateType(String),

    #[error("no factory registered for type '{0}'")]
    UnknownType(String),

    #[error("pipeline '{0}' not found")]
    PipelineNotFound(String),

    #[error("object '{0}' not found")]
    ObjectNotFound(String),

    /// The factory rejected its constructor parameters
    #[error("failed to create '{type_name}': {reason}")]
    CreationFailed { type_name: String, reason: String },
}
