// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the remote-invocation surface of media objects.

use thiserror::Error;

/// A filter setting value rejected by its setter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("filter type {value} is not supported (expected {min}..={max})")]
    FilterTypeOutOfRange { value: i32, min: i32, max: i32 },

    #[error("edge threshold {value} is out of range (expected {min}..={max})")]
    EdgeThresholdOutOfRange { value: i32, min: i32, max: i32 },
}

/// Failure of a generic `invoke` / `connect` call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvokeError {
    #[error("object '{object_id}' has no method '{method}'")]
    MethodNotFound { object_id: String, method: String },

    #[error("invalid params for '{method}': {reason}")]
    InvalidParams { method: String, reason: String },

    #[error("object '{object_id}' is a '{actual}', not a '{expected}'")]
    TypeMismatch {
        object_id: String,
        expected: String,
        actual: String,
    },

    #[error("object '{0}' not found")]
    ObjectNotFound(String),

    #[error("event '{event}' is not supported by '{type_name}'")]
    EventNotSupported { type_name: String, event: String },
}

impl InvokeError {
    /// Stable numeric code reported to remote callers, JSON-RPC style.
    pub fn code(&self) -> i64 {
        match self {
            InvokeError::MethodNotFound { .. } => -32601,
            InvokeError::InvalidParams { .. } => -32602,
            InvokeError::TypeMismatch { .. } => 40103,
            InvokeError::ObjectNotFound(_) => 40101,
            InvokeError::EventNotSupported { .. } => 40107,
        }
    }

    pub(crate) fn invalid_params(method: &str, reason: impl Into<String>) -> Self {
        InvokeError::InvalidParams {
            method: method.to_string(),
            reason: reason.into(),
        }
    }
}
