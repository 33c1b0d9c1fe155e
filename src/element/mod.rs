// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The plugin-sample filter element.
//!
//! A [`PluginSampleFilter`] is one configurable video filter placed in a
//! media pipeline. It owns its configuration state ([`FilterSettings`]) and
//! delegates the pixel work to a [`FrameProcessor`](crate::traits::FrameProcessor)
//! picked at construction. The remote surface (`connect`, `invoke`,
//! `serialize`) is implemented through [`MediaObject`](crate::traits::MediaObject)
//! and registered with the factory registry as [`PLUGIN_SAMPLE_MODULE`].

mod invoke;
mod plugin_sample;
mod settings;

pub use plugin_sample::{
    PluginSampleFilter, PLUGIN_SAMPLE_EVENTS, PLUGIN_SAMPLE_FIELDS, PLUGIN_SAMPLE_MODULE,
};
pub use settings::{check_edge_threshold, check_filter_type, FilterMode, FilterSettings};
