// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for media set bookkeeping.

use std::fmt::{Display, Formatter};

use tracing::Span;

use super::StructuredLog;

/// Pipeline created.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineCreated<'a> {
    pub pipeline: &'a str,
    pub name: &'a str,
}

impl Display for PipelineCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Created pipeline '{}' ({})", self.name, self.pipeline)
    }
}

impl StructuredLog for PipelineCreated<'_> {
    fn log(&self) {
        tracing::info!(pipeline = self.pipeline, name = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("pipeline", span_name = name, pipeline = self.pipeline)
    }
}

/// Pipeline released together with its children.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineReleased<'a> {
    pub pipeline: &'a str,
    pub children: usize,
}

impl Display for PipelineReleased<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Released pipeline '{}' and {} child object(s)",
            self.pipeline, self.children
        )
    }
}

impl StructuredLog for PipelineReleased<'_> {
    fn log(&self) {
        tracing::info!(pipeline = self.pipeline, children = self.children, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("pipeline", span_name = name, pipeline = self.pipeline)
    }
}

/// Object released.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ObjectReleased<'a> {
    pub object_id: &'a str,
}

impl Display for ObjectReleased<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Released object '{}'", self.object_id)
    }
}

impl StructuredLog for ObjectReleased<'_> {
    fn log(&self) {
        tracing::info!(object_id = self.object_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("release", span_name = name, object_id = self.object_id)
    }
}

/// Element creation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use plugin_sample::observability::messages::pipeline::ElementCreationFailed;
///
/// let msg = ElementCreationFailed {
///     type_name: "PluginSampleFilter",
///     pipeline: "0_MediaPipeline",
///     reason: "unknown processor 'gpu_sobel'",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ElementCreationFailed<'a> {
    pub type_name: &'a str,
    pub pipeline: &'a str,
    pub reason: &'a str,
}

impl Display for ElementCreationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to create '{}' in pipeline '{}': {}",
            self.type_name, self.pipeline, self.reason
        )
    }
}

impl StructuredLog for ElementCreationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            type_name = self.type_name,
            pipeline = self.pipeline,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "create",
            span_name = name,
            type_name = self.type_name,
            pipeline = self.pipeline,
        )
    }
}
