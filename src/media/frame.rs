// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Raw video frames as they flow through a filter.

use std::time::Duration;

use crate::errors::ProcessingError;

/// Packed BGRA, one byte per channel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A single decoded video frame in packed BGRA layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pts: Duration,
    pub data: Vec<u8>,
}

impl Frame {
    /// Build a frame, checking that the buffer matches the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ProcessingError> {
        let frame = Self {
            width,
            height,
            pts: Duration::ZERO,
            data,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// A fully transparent black frame.
    ///
    /// Panics if the dimensions do not fit in memory, like `vec!`.
    pub fn blank(width: u32, height: u32) -> Self {
        let len = Self::expected_len(width, height).unwrap_or(usize::MAX);
        Self {
            width,
            height,
            pts: Duration::ZERO,
            data: vec![0; len],
        }
    }

    /// Opaque frame with a bright square on a dark background, handy for
    /// exercising edge detection.
    pub fn test_pattern(width: u32, height: u32) -> Self {
        let mut frame = Self::blank(width, height);
        let (x0, x1) = (width / 4, width - width / 4);
        let (y0, y1) = (height / 4, height - height / 4);
        for y in 0..height {
            for x in 0..width {
                let inside = x >= x0 && x < x1 && y >= y0 && y < y1;
                let v = if inside { 220 } else { 20 };
                frame.set_pixel(x, y, [v, v, v, 255]);
            }
        }
        frame
    }

    /// Buffer length for the given dimensions, `None` on overflow.
    pub fn expected_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(BYTES_PER_PIXEL)
    }

    pub fn validate(&self) -> Result<(), ProcessingError> {
        let invalid = |expected| ProcessingError::InvalidFrame {
            width: self.width,
            height: self.height,
            expected,
            actual: self.data.len(),
        };
        // an overflowing size is reported as usize::MAX, which no buffer can match
        let expected = Self::expected_len(self.width, self.height).ok_or_else(|| invalid(usize::MAX))?;
        if self.data.len() != expected {
            return Err(invalid(expected));
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// BGRA value at `(x, y)`. Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, bgra: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&bgra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_buffer() {
        let err = Frame::new(4, 4, vec![0; 10]).unwrap_err();
        assert_eq!(
            err,
            ProcessingError::InvalidFrame {
                width: 4,
                height: 4,
                expected: 64,
                actual: 10,
            }
        );
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        let err = Frame::new(u32::MAX, u32::MAX, vec![]).unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::InvalidFrame { expected: usize::MAX, actual: 0, .. }
        ));
        assert_eq!(Frame::expected_len(u32::MAX, u32::MAX), None);
        assert_eq!(Frame::expected_len(3, 2), Some(24));
    }

    #[test]
    fn test_test_pattern_has_bright_center() {
        let frame = Frame::test_pattern(8, 8);
        assert_eq!(frame.pixel(0, 0), [20, 20, 20, 255]);
        assert_eq!(frame.pixel(4, 4), [220, 220, 220, 255]);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_set_pixel_round_trips() {
        let mut frame = Frame::blank(3, 2);
        frame.set_pixel(2, 1, [1, 2, 3, 4]);
        assert_eq!(frame.pixel(2, 1), [1, 2, 3, 4]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0, 0]);
    }
}
