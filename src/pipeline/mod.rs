// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pipelines, the objects placed in them, and the handles that refer to
//! both. The [`MediaSet`] is the only owner; everything else holds ids.

mod handle;
mod media_pipeline;
mod media_set;

pub use handle::{ObjectId, PipelineHandle};
pub use media_pipeline::MediaPipeline;
pub use media_set::MediaSet;
