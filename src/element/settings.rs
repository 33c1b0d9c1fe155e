// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The two integers a plugin-sample filter is configured with.

use serde::{Deserialize, Serialize};

use crate::config::consts::{
    DEFAULT_EDGE_THRESHOLD, DEFAULT_FILTER_TYPE, FILTER_TYPE_EDGES, FILTER_TYPE_GRAYSCALE,
    MAX_EDGE_THRESHOLD, MIN_EDGE_THRESHOLD,
};
use crate::errors::SettingsError;

/// What the backend does with a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Edges,
    Grayscale,
}

/// Configuration state of one filter instance.
///
/// Values only change through [`FilterSettings::set_filter_type`] and
/// [`FilterSettings::set_edge_threshold`], both of which leave the settings
/// untouched on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    filter_type: i32,
    edge_threshold: i32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            filter_type: DEFAULT_FILTER_TYPE,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl FilterSettings {
    pub fn new(filter_type: i32, edge_threshold: i32) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.set_filter_type(filter_type)?;
        settings.set_edge_threshold(edge_threshold)?;
        Ok(settings)
    }

    pub fn filter_type(&self) -> i32 {
        self.filter_type
    }

    pub fn edge_threshold(&self) -> i32 {
        self.edge_threshold
    }

    pub fn mode(&self) -> FilterMode {
        if self.filter_type == FILTER_TYPE_EDGES {
            FilterMode::Edges
        } else {
            FilterMode::Grayscale
        }
    }

    pub fn set_filter_type(&mut self, value: i32) -> Result<(), SettingsError> {
        check_filter_type(value)?;
        self.filter_type = value;
        Ok(())
    }

    pub fn set_edge_threshold(&mut self, value: i32) -> Result<(), SettingsError> {
        check_edge_threshold(value)?;
        self.edge_threshold = value;
        Ok(())
    }

    /// Re-check values that bypassed the setters, e.g. after deserializing.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_filter_type(self.filter_type)?;
        check_edge_threshold(self.edge_threshold)
    }
}

pub fn check_filter_type(value: i32) -> Result<(), SettingsError> {
    if !(FILTER_TYPE_EDGES..=FILTER_TYPE_GRAYSCALE).contains(&value) {
        return Err(SettingsError::FilterTypeOutOfRange {
            value,
            min: FILTER_TYPE_EDGES,
            max: FILTER_TYPE_GRAYSCALE,
        });
    }
    Ok(())
}

pub fn check_edge_threshold(value: i32) -> Result<(), SettingsError> {
    if !(MIN_EDGE_THRESHOLD..=MAX_EDGE_THRESHOLD).contains(&value) {
        return Err(SettingsError::EdgeThresholdOutOfRange {
            value,
            min: MIN_EDGE_THRESHOLD,
            max: MAX_EDGE_THRESHOLD,
        });
    }
    Ok(())
}
