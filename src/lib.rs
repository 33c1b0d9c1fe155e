// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // frame processing backends
pub mod config;        // yaml config + runtime builder
pub mod element;       // the plugin-sample filter
pub mod engine;        // frame runner
pub mod errors;        // error handling
pub mod events;        // media events + dispatch
pub mod media;         // frames
pub mod observability;
pub mod pipeline;      // media set, pipelines, handles
pub mod registry;      // factory registry
pub mod serialization; // json serializer
pub mod traits;        // unified abstractions
