// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pixel kernels shared by the local processors.

use crate::media::{Frame, BYTES_PER_PIXEL};

/// Luma of every pixel, BT.601 weights in 8.8 fixed point.
pub fn to_gray(frame: &Frame) -> Vec<u8> {
    frame
        .data
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|px| {
            let (b, g, r) = (px[0] as u32, px[1] as u32, px[2] as u32);
            ((29 * b + 150 * g + 77 * r + 128) >> 8) as u8
        })
        .collect()
}

/// Binary edge map from a gray plane: 255 where the 3x3 Sobel L1 gradient
/// is non-zero and at least `threshold`, 0 elsewhere. The one-pixel border
/// is always 0.
pub fn sobel_edges(gray: &[u8], width: u32, height: u32, threshold: i32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; w * h];
    if w < 3 || h < 3 {
        return out;
    }

    let at = |x: usize, y: usize| gray[y * w + x] as i32;
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let gx = (at(x + 1, y - 1) + 2 * at(x + 1, y) + at(x + 1, y + 1))
                - (at(x - 1, y - 1) + 2 * at(x - 1, y) + at(x - 1, y + 1));
            let gy = (at(x - 1, y + 1) + 2 * at(x, y + 1) + at(x + 1, y + 1))
                - (at(x - 1, y - 1) + 2 * at(x, y - 1) + at(x + 1, y - 1));
            let magnitude = gx.abs() + gy.abs();
            if magnitude > 0 && magnitude >= threshold {
                out[y * w + x] = 255;
            }
        }
    }
    out
}

/// Write a gray plane back into `frame`, replicating it into B, G and R.
/// Alpha is kept from the source.
pub fn write_gray(frame: &mut Frame, gray: &[u8]) {
    for (px, &v) in frame.data.chunks_exact_mut(BYTES_PER_PIXEL).zip(gray) {
        px[0] = v;
        px[1] = v;
        px[2] = v;
    }
}
