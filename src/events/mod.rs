// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Events raised by media objects and the subscriptions that receive them.

mod dispatcher;

pub use dispatcher::{EventDispatcher, SubscriptionId};

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::SystemTime;

use serde::Serialize;
use serde_json::Value;

use crate::pipeline::ObjectId;

/// Event classes a plugin-sample filter can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventType {
    Error,
    MediaFlowInStateChanged,
    MediaFlowOutStateChanged,
    FilterConfigurationChanged,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Error,
        EventType::MediaFlowInStateChanged,
        EventType::MediaFlowOutStateChanged,
        EventType::FilterConfigurationChanged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Error => "Error",
            EventType::MediaFlowInStateChanged => "MediaFlowInStateChanged",
            EventType::MediaFlowOutStateChanged => "MediaFlowOutStateChanged",
            EventType::FilterConfigurationChanged => "FilterConfigurationChanged",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("unknown event type '{}'", s))
    }
}

/// Whether media is currently flowing through a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowState {
    Flowing,
    NotFlowing,
}

/// One raised event, as delivered to handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub source: ObjectId,
    pub timestamp: SystemTime,
    pub data: Value,
}

impl MediaEvent {
    pub fn new(event_type: EventType, source: ObjectId, data: Value) -> Self {
        Self {
            event_type,
            source,
            timestamp: SystemTime::now(),
            data,
        }
    }

    pub fn flow_in(source: ObjectId, state: FlowState) -> Self {
        Self::new(
            EventType::MediaFlowInStateChanged,
            source,
            serde_json::json!({ "state": state }),
        )
    }

    pub fn flow_out(source: ObjectId, state: FlowState) -> Self {
        Self::new(
            EventType::MediaFlowOutStateChanged,
            source,
            serde_json::json!({ "state": state }),
        )
    }

    pub fn error(source: ObjectId, code: i64, description: impl Into<String>) -> Self {
        Self::new(
            EventType::Error,
            source,
            serde_json::json!({ "errorCode": code, "description": description.into() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_parses_all_names() {
        for event in EventType::ALL {
            assert_eq!(event.as_str().parse::<EventType>().unwrap(), event);
        }
        assert!("CodecChanged".parse::<EventType>().is_err());
    }

    #[test]
    fn test_flow_event_payload() {
        let event = MediaEvent::flow_in(ObjectId::from("p/1_X"), FlowState::Flowing);
        assert_eq!(event.event_type, EventType::MediaFlowInStateChanged);
        assert_eq!(event.data["state"], "Flowing");
    }
}
