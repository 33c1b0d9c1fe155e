// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::kernels::{sobel_edges, to_gray, write_gray};
use crate::element::{FilterMode, FilterSettings};
use crate::errors::ProcessingError;
use crate::media::Frame;
use crate::traits::FrameProcessor;

/// The sample's stock processing: gray conversion, followed by edge
/// detection when the filter is in edge mode.
///
/// Edge mode renders white edges on black; grayscale mode renders the luma
/// plane. Both write gray into B, G and R and keep the source alpha.
pub struct OpenCvSampleProcessor;

impl OpenCvSampleProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenCvSampleProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameProcessor for OpenCvSampleProcessor {
    fn apply(&self, mut frame: Frame, settings: FilterSettings) -> Result<Frame, ProcessingError> {
        frame.validate()?;

        let gray = to_gray(&frame);
        let plane = match settings.mode() {
            FilterMode::Edges => {
                sobel_edges(&gray, frame.width, frame.height, settings.edge_threshold())
            }
            FilterMode::Grayscale => gray,
        };
        write_gray(&mut frame, &plane);
        Ok(frame)
    }

    fn name(&self) -> &'static str {
        "opencv_sample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_pixels(frame: &Frame) -> usize {
        frame
            .data
            .chunks_exact(4)
            .filter(|px| px[..3] == [255, 255, 255])
            .count()
    }

    #[test]
    fn test_edge_mode_outlines_square() {
        let processor = OpenCvSampleProcessor::new();
        let out = processor
            .apply(Frame::test_pattern(16, 16), FilterSettings::new(0, 125).unwrap())
            .unwrap();

        // interior and background are flat
        assert_eq!(out.pixel(8, 8), [0, 0, 0, 255]);
        assert_eq!(out.pixel(1, 1), [0, 0, 0, 255]);
        // boundary of the square is an edge
        assert_eq!(out.pixel(4, 8), [255, 255, 255, 255]);
        assert!(white_pixels(&out) > 0);
    }

    #[test]
    fn test_grayscale_mode_keeps_luma() {
        let processor = OpenCvSampleProcessor::new();
        let mut frame = Frame::blank(2, 1);
        frame.set_pixel(0, 0, [0, 0, 255, 255]);

        let out = processor
            .apply(frame, FilterSettings::new(1, 125).unwrap())
            .unwrap();
        assert_eq!(out.pixel(0, 0), [77, 77, 77, 255]);
        assert_eq!(out.pixel(1, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_threshold_changes_output() {
        // soft step of 10 levels: gradient 40, below a threshold of 125
        let mut frame = Frame::blank(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                let v = if x < 3 { 100 } else { 110 };
                frame.set_pixel(x, y, [v, v, v, 255]);
            }
        }
        let processor = OpenCvSampleProcessor::new();

        let strict = processor
            .apply(frame.clone(), FilterSettings::new(0, 125).unwrap())
            .unwrap();
        let loose = processor
            .apply(frame, FilterSettings::new(0, 10).unwrap())
            .unwrap();

        assert_eq!(white_pixels(&strict), 0);
        assert!(white_pixels(&loose) > 0);
    }

    #[test]
    fn test_zero_threshold_leaves_flat_frame_black() {
        let mut frame = Frame::blank(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                frame.set_pixel(x, y, [40, 90, 200, 255]);
            }
        }

        let out = OpenCvSampleProcessor::new()
            .apply(frame, FilterSettings::new(0, 0).unwrap())
            .unwrap();
        assert!(out.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn test_rejects_corrupt_frame() {
        let frame = Frame {
            width: 4,
            height: 4,
            pts: Default::default(),
            data: vec![0; 3],
        };
        let err = OpenCvSampleProcessor::new()
            .apply(frame, FilterSettings::default())
            .unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidFrame { .. }));
    }
}
