// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure while transforming a single frame
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessingError {
    #[error("invalid frame {width}x{height}: expected {expected} bytes, got {actual}")]
    InvalidFrame {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("processor '{processor}' failed: {reason}")]
    Backend { processor: String, reason: String },

    #[error("processing task aborted: {0}")]
    Aborted(String),
}

impl ProcessingError {
    /// Code carried by the `Error` event raised for this failure.
    pub fn code(&self) -> i64 {
        match self {
            ProcessingError::InvalidFrame { .. } => 40001,
            ProcessingError::Backend { .. } => 40002,
            ProcessingError::Aborted(_) => 40003,
        }
    }
}

/// Failure while reading or writing through a `JsonSerializer`
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("serializer is in {0} mode")]
    WrongMode(&'static str),

    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("field '{field}': {source}")]
    Field {
        field: String,
        source: serde_json::Error,
    },

    #[error("expected a JSON object, got {0}")]
    NotAnObject(String),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("no object with id '{0}'")]
    UnknownObject(String),
}
