// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod invoke;
mod processing;
mod registry;

pub use config::{ConfigError, ValidationError};
pub use invoke::{InvokeError, SettingsError};
pub use processing::{ProcessingError, SerializationError};
pub use registry::RegistryError;
