// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Frame-processing backends for the plugin-sample filter.
//!
//! A filter never transforms pixels itself; it hands each frame and a
//! snapshot of its settings to a [`FrameProcessor`](crate::traits::FrameProcessor)
//! chosen by name when the filter is constructed.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process Rust processors:
//! - **opencv_sample**: edge detection or grayscale, picked by `filter_type`
//! - **grayscale**: grayscale regardless of settings
//! - **passthrough**: frames leave untouched
//!
//! ## Stub Backend (Test-Only)
//! - **RecordingProcessor**: remembers the settings each frame saw
//! - **FailingProcessor**: always fails, for error-event tests
//!
//! # Example
//! ```rust
//! use plugin_sample::backends::local::LocalProcessorFactory;
//!
//! let processor = LocalProcessorFactory::create_processor("opencv_sample")?;
//! assert_eq!(processor.name(), "opencv_sample");
//! # Ok::<(), String>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
