// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod frame;

pub use frame::{Frame, BYTES_PER_PIXEL};
