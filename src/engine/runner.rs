// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Drives frames through a plugin-sample filter.
//!
//! A [`FilterRunner`] takes frames from an input channel, processes each
//! one on the blocking pool with the filter's settings as they stand at
//! that moment, and forwards the result to an output channel. While
//! running it raises the filter's events:
//!
//! - `MediaFlowInStateChanged` / `MediaFlowOutStateChanged` when media
//!   first arrives / leaves, and `NotFlowing` for both when the run ends
//! - `FilterConfigurationChanged` when the settings differ from those used
//!   for the previous frame
//! - `Error` for every frame the backend rejects; the run continues
//!
//! The run ends when the input closes, the output receiver is dropped, or
//! the cancellation token fires.

use std::sync::Arc;
use std::time::Instant;

use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::element::{FilterSettings, PluginSampleFilter};
use crate::errors::ProcessingError;
use crate::events::{EventType, FlowState, MediaEvent};
use crate::media::Frame;
use crate::observability::messages::runner::{
    FrameFailed, FrameProcessed, RunnerStarted, RunnerStopped,
};
use crate::observability::messages::StructuredLog;
use crate::traits::MediaObject;

/// Counters reported when a run ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunnerStats {
    pub frames_in: u64,
    pub frames_out: u64,
    pub errors: u64,
    pub config_changes: u64,
}

pub struct FilterRunner {
    filter: Arc<PluginSampleFilter>,
    cancel: CancellationToken,
}

impl FilterRunner {
    pub fn new(filter: Arc<PluginSampleFilter>) -> Self {
        Self {
            filter,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that stops the run when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn spawn(self, input: mpsc::Receiver<Frame>, output: mpsc::Sender<Frame>) -> JoinHandle<RunnerStats> {
        tokio::spawn(self.run(input, output))
    }

    pub async fn run(self, mut input: mpsc::Receiver<Frame>, output: mpsc::Sender<Frame>) -> RunnerStats {
        let object_id = self.filter.id().clone();
        let processor = self.filter.processor();

        let start_msg = RunnerStarted {
            object_id: object_id.as_str(),
            processor: processor.name(),
        };
        start_msg.log();

        let mut stats = RunnerStats::default();
        let mut last_settings = self.filter.settings();
        let (mut flowing_in, mut flowing_out) = (false, false);

        let reason = loop {
            let frame = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break "cancelled",
                next = input.recv() => match next {
                    Some(frame) => frame,
                    None => break "end of stream",
                },
            };

            let sequence = stats.frames_in;
            stats.frames_in += 1;
            if !flowing_in {
                flowing_in = true;
                self.emit(MediaEvent::flow_in(object_id.clone(), FlowState::Flowing)).await;
            }

            let settings = self.filter.settings();
            if settings != last_settings {
                stats.config_changes += 1;
                self.emit(config_changed(&object_id, last_settings, settings)).await;
                last_settings = settings;
            }

            let frame_size = frame.data.len();
            let started = Instant::now();
            let backend = Arc::clone(&processor);
            let result = tokio::task::spawn_blocking(move || backend.apply(frame, settings))
                .await
                .unwrap_or_else(|e| Err(ProcessingError::Aborted(e.to_string())));

            match result {
                Ok(processed) => {
                    FrameProcessed {
                        object_id: object_id.as_str(),
                        sequence,
                        frame_size,
                        duration: started.elapsed(),
                    }
                    .log();

                    if !flowing_out {
                        flowing_out = true;
                        self.emit(MediaEvent::flow_out(object_id.clone(), FlowState::Flowing)).await;
                    }
                    // cancellation also interrupts a send blocked on a full output
                    let sent = tokio::select! {
                        biased;
                        _ = self.cancel.cancelled() => break "cancelled",
                        sent = output.send(processed) => sent,
                    };
                    if sent.is_err() {
                        break "output closed";
                    }
                    stats.frames_out += 1;
                }
                Err(error) => {
                    stats.errors += 1;
                    FrameFailed {
                        object_id: object_id.as_str(),
                        sequence,
                        error: &error,
                    }
                    .log();
                    self.emit(MediaEvent::error(object_id.clone(), error.code(), error.to_string()))
                        .await;
                }
            }
        };

        if flowing_in {
            self.emit(MediaEvent::flow_in(object_id.clone(), FlowState::NotFlowing)).await;
        }
        if flowing_out {
            self.emit(MediaEvent::flow_out(object_id.clone(), FlowState::NotFlowing)).await;
        }

        RunnerStopped {
            object_id: object_id.as_str(),
            frames_in: stats.frames_in,
            frames_out: stats.frames_out,
            errors: stats.errors,
            reason,
        }
        .log();
        stats
    }

    async fn emit(&self, event: MediaEvent) {
        self.filter.events().emit(&event).await;
    }
}

fn config_changed(
    source: &crate::pipeline::ObjectId,
    old: FilterSettings,
    new: FilterSettings,
) -> MediaEvent {
    MediaEvent::new(
        EventType::FilterConfigurationChanged,
        source.clone(),
        json!({ "old": old, "new": new }),
    )
}
