use super::kernels::{to_gray, write_gray};
use crate::element::FilterSettings;
use crate::errors::ProcessingError;
use crate::media::Frame;
use crate::traits::FrameProcessor;

/// Grayscale regardless of the filter's mode.
pub struct GrayscaleProcessor;

impl GrayscaleProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GrayscaleProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameProcessor for GrayscaleProcessor {
    fn apply(&self, mut frame: Frame, _settings: FilterSettings) -> Result<Frame, ProcessingError> {
        frame.validate()?;
        let gray = to_gray(&frame);
        write_gray(&mut frame, &gray);
        Ok(frame)
    }

    fn name(&self) -> &'static str {
        "grayscale"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_edge_mode() {
        let mut frame = Frame::blank(1, 1);
        frame.set_pixel(0, 0, [255, 0, 0, 255]);

        let out = GrayscaleProcessor::new()
            .apply(frame, FilterSettings::new(0, 0).unwrap())
            .unwrap();
        assert_eq!(out.pixel(0, 0), [29, 29, 29, 255]);
    }
}
