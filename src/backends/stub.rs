// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use crate::element::FilterSettings;
use crate::errors::ProcessingError;
use crate::media::Frame;
use crate::traits::FrameProcessor;

/// Passes frames through and remembers the settings each one was given
#[derive(Default)]
pub struct RecordingProcessor {
    seen: Mutex<Vec<FilterSettings>>,
}

impl RecordingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> Vec<FilterSettings> {
        self.seen.lock().unwrap().clone()
    }
}

impl FrameProcessor for RecordingProcessor {
    fn apply(&self, frame: Frame, settings: FilterSettings) -> Result<Frame, ProcessingError> {
        self.seen.lock().unwrap().push(settings);
        Ok(frame)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// A processor that always fails for testing failure scenarios
pub struct FailingProcessor;

impl FrameProcessor for FailingProcessor {
    fn apply(&self, _frame: Frame, _settings: FilterSettings) -> Result<Frame, ProcessingError> {
        Err(ProcessingError::Backend {
            processor: self.name().to_string(),
            reason: "Simulated processor failure".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
