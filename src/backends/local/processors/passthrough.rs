use crate::element::FilterSettings;
use crate::errors::ProcessingError;
use crate::media::Frame;
use crate::traits::FrameProcessor;

/// Leaves frames as they are.
pub struct PassthroughProcessor;

impl PassthroughProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PassthroughProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameProcessor for PassthroughProcessor {
    fn apply(&self, frame: Frame, _settings: FilterSettings) -> Result<Frame, ProcessingError> {
        frame.validate()?;
        Ok(frame)
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }
}
