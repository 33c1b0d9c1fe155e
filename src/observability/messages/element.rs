// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for filter element lifecycle and configuration events.
//!
//! This module contains message types for logging events related to:
//! * Element construction
//! * Settings changes and rejected values
//! * Generic invocation failures
//! * Event subscriptions

use std::fmt::{Display, Formatter};

use tracing::Span;

use super::StructuredLog;

/// Element constructed and attached to its pipeline.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use plugin_sample::observability::messages::element::ElementCreated;
///
/// let msg = ElementCreated {
///     object_id: "0_MediaPipeline/1_PluginSampleFilter",
///     type_name: "PluginSampleFilter",
///     processor: "opencv_sample",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ElementCreated<'a> {
    pub object_id: &'a str,
    pub type_name: &'a str,
    pub processor: &'a str,
}

impl Display for ElementCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Created {} '{}' with processor '{}'",
            self.type_name, self.object_id, self.processor
        )
    }
}

impl StructuredLog for ElementCreated<'_> {
    fn log(&self) {
        tracing::info!(
            object_id = self.object_id,
            type_name = self.type_name,
            processor = self.processor,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "element",
            span_name = name,
            object_id = self.object_id,
            type_name = self.type_name,
        )
    }
}

/// A setting took a new value.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use plugin_sample::observability::messages::element::SettingChanged;
///
/// let msg = SettingChanged {
///     object_id: "0_MediaPipeline/1_PluginSampleFilter",
///     setting: "edgeThreshold",
///     old: 125,
///     new: 60,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SettingChanged<'a> {
    pub object_id: &'a str,
    pub setting: &'a str,
    pub old: i32,
    pub new: i32,
}

impl Display for SettingChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Element '{}' {} changed: {} -> {}",
            self.object_id, self.setting, self.old, self.new
        )
    }
}

impl StructuredLog for SettingChanged<'_> {
    fn log(&self) {
        tracing::info!(
            object_id = self.object_id,
            setting = self.setting,
            old = self.old,
            new = self.new,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "setting",
            span_name = name,
            object_id = self.object_id,
            setting = self.setting,
        )
    }
}

/// A setter refused a value.
///
/// # Log Level
/// `warn!` - Caller error, state unchanged
pub struct SettingRejected<'a> {
    pub object_id: &'a str,
    pub setting: &'a str,
    pub value: i32,
    pub error: &'a dyn std::error::Error,
}

impl Display for SettingRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Element '{}' rejected {}={}: {}",
            self.object_id, self.setting, self.value, self.error
        )
    }
}

impl StructuredLog for SettingRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            object_id = self.object_id,
            setting = self.setting,
            value = self.value,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "setting",
            span_name = name,
            object_id = self.object_id,
            setting = self.setting,
        )
    }
}

/// A generic invocation failed.
///
/// # Log Level
/// `warn!` - Caller error reported back to the remote side
pub struct InvokeFailed<'a> {
    pub object_id: &'a str,
    pub method: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for InvokeFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invocation of '{}' on '{}' failed: {}",
            self.method, self.object_id, self.error
        )
    }
}

impl StructuredLog for InvokeFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            object_id = self.object_id,
            method = self.method,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "invoke",
            span_name = name,
            object_id = self.object_id,
            method = self.method,
        )
    }
}

/// Outcome of a `connect` call.
///
/// # Log Level
/// `debug!` - Subscriptions are routine
pub struct EventConnected<'a> {
    pub object_id: &'a str,
    pub event: &'a str,
    pub accepted: bool,
}

impl Display for EventConnected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.accepted {
            write!(f, "Subscribed to '{}' on '{}'", self.event, self.object_id)
        } else {
            write!(
                f,
                "Refused subscription to unsupported event '{}' on '{}'",
                self.event, self.object_id
            )
        }
    }
}

impl StructuredLog for EventConnected<'_> {
    fn log(&self) {
        tracing::debug!(
            object_id = self.object_id,
            event = self.event,
            accepted = self.accepted,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "connect",
            span_name = name,
            object_id = self.object_id,
            event = self.event,
        )
    }
}
