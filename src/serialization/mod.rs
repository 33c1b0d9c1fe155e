// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod json;

pub use json::{serialize_fields, JsonSerializer};
