// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log lines are emitted through small message structs that implement
//! `Display` and [`messages::StructuredLog`], so that wording lives in one
//! place and every event carries the same structured fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::element` - filter construction, settings and invocation
//! * `messages::pipeline` - media set bookkeeping (pipelines, releases)
//! * `messages::runner` - frame processing lifecycle
//!
//! # Usage
//!
//! ```rust
//! use plugin_sample::observability::messages::element::InvokeFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = InvokeFailed {
//!     object_id: "p/1_PluginSampleFilter",
//!     method: "setFilterType",
//!     error: &error,
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber, honoring `RUST_LOG` and falling
/// back to `default_directive` when it is unset.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    // a second install (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
