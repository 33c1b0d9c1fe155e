use crate::element::FilterSettings;
use crate::errors::ProcessingError;
use crate::media::Frame;

/// Processing strategy behind a filter: turns one frame into another given
/// the filter's current settings.
pub trait FrameProcessor: Send + Sync {
    fn apply(&self, frame: Frame, settings: FilterSettings) -> Result<Frame, ProcessingError>;

    fn name(&self) -> &'static str;
}
