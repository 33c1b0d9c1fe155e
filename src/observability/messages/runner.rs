// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use super::StructuredLog;

pub struct RunnerStarted<'a> {
    pub object_id: &'a str,
    pub processor: &'a str,
}

impl Display for RunnerStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Frame runner for '{}' started with processor '{}'",
            self.object_id, self.processor
        )
    }
}

impl StructuredLog for RunnerStarted<'_> {
    fn log(&self) {
        tracing::info!(object_id = self.object_id, processor = self.processor, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "runner",
            span_name = name,
            object_id = self.object_id,
            processor = self.processor,
        )
    }
}

/// Logged at `debug!`, once per frame.
pub struct FrameProcessed<'a> {
    pub object_id: &'a str,
    pub sequence: u64,
    pub frame_size: usize,
    pub duration: Duration,
}

impl Display for FrameProcessed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Element '{}' processed frame #{}: {} bytes in {:?}",
            self.object_id, self.sequence, self.frame_size, self.duration
        )
    }
}

impl StructuredLog for FrameProcessed<'_> {
    fn log(&self) {
        tracing::debug!(
            object_id = self.object_id,
            sequence = self.sequence,
            frame_size = self.frame_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "frame",
            span_name = name,
            object_id = self.object_id,
            sequence = self.sequence,
        )
    }
}

pub struct FrameFailed<'a> {
    pub object_id: &'a str,
    pub sequence: u64,
    pub error: &'a dyn std::error::Error,
}

impl Display for FrameFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Element '{}' failed on frame #{}: {}",
            self.object_id, self.sequence, self.error
        )
    }
}

impl StructuredLog for FrameFailed<'_> {
    fn log(&self) {
        tracing::error!(
            object_id = self.object_id,
            sequence = self.sequence,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "frame",
            span_name = name,
            object_id = self.object_id,
            sequence = self.sequence,
        )
    }
}

pub struct RunnerStopped<'a> {
    pub object_id: &'a str,
    pub frames_in: u64,
    pub frames_out: u64,
    pub errors: u64,
    pub reason: &'a str,
}

impl Display for RunnerStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Frame runner for '{}' stopped ({}): in={}, out={}, errors={}",
            self.object_id, self.reason, self.frames_in, self.frames_out, self.errors
        )
    }
}

impl StructuredLog for RunnerStopped<'_> {
    fn log(&self) {
        tracing::info!(
            object_id = self.object_id,
            frames_in = self.frames_in,
            frames_out = self.frames_out,
            errors = self.errors,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("runner", span_name = name, object_id = self.object_id)
    }
}
