// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `element` - filter construction, settings changes and invocation
//! * `pipeline` - pipeline and object bookkeeping in the media set
//! * `runner` - frame processing lifecycle
//!
//! # Usage Pattern
//!
//! ```rust
//! use plugin_sample::observability::messages::pipeline::PipelineCreated;
//! use plugin_sample::observability::messages::StructuredLog;
//!
//! let msg = PipelineCreated {
//!     pipeline: "0_MediaPipeline",
//!     name: "main",
//! };
//!
//! msg.log();
//! ```

pub mod element;
pub mod pipeline;
pub mod runner;

use tracing::Span;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level with its fields attached.
    fn log(&self);

    /// A span carrying the message's fields, for scoping nested work.
    fn span(&self, name: &str) -> Span;
}
