// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod grayscale;
pub mod kernels;
pub mod opencv_sample;
pub mod passthrough;

pub use grayscale::GrayscaleProcessor;
pub use opencv_sample::OpenCvSampleProcessor;
pub use passthrough::PassthroughProcessor;
