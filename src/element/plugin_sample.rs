// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use serde_json::Value;

use super::settings::FilterSettings;
use crate::backends::local::LocalProcessorFactory;
use crate::config::consts::PLUGIN_SAMPLE_TYPE;
use crate::errors::{InvokeError, ProcessingError, RegistryError, SerializationError, SettingsError};
use crate::events::{EventDispatcher, EventType, SubscriptionId};
use crate::media::Frame;
use crate::observability::messages::element::{
    ElementCreated, EventConnected, SettingChanged, SettingRejected,
};
use crate::observability::messages::StructuredLog;
use crate::pipeline::{ObjectId, PipelineHandle};
use crate::registry::{FactoryContext, FieldDescriptor, FieldKind, ModuleInfo};
use crate::serialization::{serialize_fields, JsonSerializer};
use crate::traits::{EventHandler, FrameProcessor, MediaObject};

pub const PLUGIN_SAMPLE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("filterType", FieldKind::Integer),
    FieldDescriptor::new("edgeThreshold", FieldKind::Integer),
    FieldDescriptor::new("name", FieldKind::String),
    FieldDescriptor::new("mediaPipeline", FieldKind::ObjectRef),
];

pub const PLUGIN_SAMPLE_EVENTS: &[EventType] = &[
    EventType::Error,
    EventType::MediaFlowInStateChanged,
    EventType::MediaFlowOutStateChanged,
    EventType::FilterConfigurationChanged,
];

pub const PLUGIN_SAMPLE_MODULE: ModuleInfo = ModuleInfo {
    type_name: PLUGIN_SAMPLE_TYPE,
    factory: PluginSampleFilter::create,
    invoke: PluginSampleFilter::dispatch,
    fields: PLUGIN_SAMPLE_FIELDS,
    events: PLUGIN_SAMPLE_EVENTS,
};

/// Constructor parameters accepted from the host, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConstructorParams {
    name: Option<String>,
    filter_type: Option<i32>,
    edge_threshold: Option<i32>,
    processor: Option<String>,
}

pub struct PluginSampleFilter {
    id: ObjectId,
    pipeline: PipelineHandle,
    name: RwLock<String>,
    created_at: SystemTime,
    settings: RwLock<FilterSettings>,
    processor: Arc<dyn FrameProcessor>,
    events: EventDispatcher,
}

impl PluginSampleFilter {
    pub fn new(
        id: ObjectId,
        pipeline: PipelineHandle,
        settings: FilterSettings,
        processor: Arc<dyn FrameProcessor>,
    ) -> Self {
        Self {
            name: RwLock::new(id.to_string()),
            id,
            pipeline,
            created_at: SystemTime::now(),
            settings: RwLock::new(settings),
            processor,
            events: EventDispatcher::new(),
        }
    }

    /// Build a filter from host constructor parameters.
    ///
    /// Parameters left out fall back to the module defaults in `context`.
    pub fn from_params(context: FactoryContext, params: &Value) -> Result<Self, RegistryError> {
        let failed = |reason: String| RegistryError::CreationFailed {
            type_name: PLUGIN_SAMPLE_TYPE.to_string(),
            reason,
        };

        let params: ConstructorParams = match params {
            Value::Null => ConstructorParams::default(),
            other => ConstructorParams::deserialize(other).map_err(|e| failed(e.to_string()))?,
        };

        let defaults = &context.defaults;
        let settings = FilterSettings::new(
            params.filter_type.unwrap_or(defaults.filter_type),
            params.edge_threshold.unwrap_or(defaults.edge_threshold),
        )
        .map_err(|e| failed(e.to_string()))?;

        let processor_name = params
            .processor
            .as_deref()
            .unwrap_or(defaults.processor.as_str());
        let processor = LocalProcessorFactory::create_processor(processor_name).map_err(failed)?;

        let filter = Self::new(context.id, context.pipeline, settings, processor);
        if let Some(name) = params.name {
            filter.set_name(name);
        }

        ElementCreated {
            object_id: filter.id.as_str(),
            type_name: PLUGIN_SAMPLE_TYPE,
            processor: filter.processor.name(),
        }
        .log();

        Ok(filter)
    }

    /// Registry factory entry point.
    pub fn create(context: FactoryContext, params: &Value) -> Result<Arc<dyn MediaObject>, RegistryError> {
        Ok(Arc::new(Self::from_params(context, params)?))
    }

    /// Snapshot of the current settings, as the backend will see them.
    pub fn settings(&self) -> FilterSettings {
        *self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_filter_type(&self, filter_type: i32) -> Result<(), SettingsError> {
        self.update_setting("filterType", filter_type, |s, v| {
            let old = s.filter_type();
            s.set_filter_type(v).map(|_| old)
        })
    }

    pub fn set_edge_threshold(&self, edge_value: i32) -> Result<(), SettingsError> {
        self.update_setting("edgeThreshold", edge_value, |s, v| {
            let old = s.edge_threshold();
            s.set_edge_threshold(v).map(|_| old)
        })
    }

    fn update_setting(
        &self,
        setting: &str,
        value: i32,
        apply: impl FnOnce(&mut FilterSettings, i32) -> Result<i32, SettingsError>,
    ) -> Result<(), SettingsError> {
        let result = {
            let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
            apply(&mut settings, value)
        };

        match result {
            Ok(old) => {
                SettingChanged {
                    object_id: self.id.as_str(),
                    setting,
                    old,
                    new: value,
                }
                .log();
                Ok(())
            }
            Err(error) => {
                SettingRejected {
                    object_id: self.id.as_str(),
                    setting,
                    value,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    pub fn name(&self) -> String {
        self.name.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write().unwrap_or_else(PoisonError::into_inner) = name.into();
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Seconds since the Unix epoch at construction.
    pub fn creation_time(&self) -> u64 {
        self.created_at
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }

    pub fn processor(&self) -> Arc<dyn FrameProcessor> {
        Arc::clone(&self.processor)
    }

    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// Like `connect`, but hands back the subscription so it can be
    /// disconnected. `None` when the event is not supported.
    pub fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) -> Option<SubscriptionId> {
        let parsed = event_type
            .parse::<EventType>()
            .ok()
            .filter(|event| PLUGIN_SAMPLE_MODULE.events.contains(event));
        EventConnected {
            object_id: self.id.as_str(),
            event: event_type,
            accepted: parsed.is_some(),
        }
        .log();
        parsed.map(|event| self.events.subscribe(event, handler))
    }

    pub fn disconnect(&self, subscription: SubscriptionId) -> bool {
        self.events.disconnect(subscription)
    }

    /// Run one frame through the backend with the current settings.
    pub fn process(&self, frame: Frame) -> Result<Frame, ProcessingError> {
        self.processor.apply(frame, self.settings())
    }

    /// Restore settings (and name, if present) from a reader.
    ///
    /// The record must come from a `PluginSampleFilter`. Nothing is changed
    /// unless every value is valid.
    fn restore(&self, serializer: &JsonSerializer) -> Result<(), SerializationError> {
        let type_name: String = serializer.read_field("type")?;
        if type_name != PLUGIN_SAMPLE_TYPE {
            return Err(SerializationError::InvalidValue {
                field: "type".to_string(),
                reason: format!("expected '{}', got '{}'", PLUGIN_SAMPLE_TYPE, type_name),
            });
        }

        let settings: FilterSettings = serializer.read_all()?;
        settings
            .validate()
            .map_err(|e| SerializationError::InvalidValue {
                field: "settings".to_string(),
                reason: e.to_string(),
            })?;
        let name: Option<String> = match serializer.read_field("name") {
            Ok(name) => Some(name),
            Err(SerializationError::MissingField(_)) => None,
            Err(e) => return Err(e),
        };

        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = settings;
        if let Some(name) = name {
            self.set_name(name);
        }
        Ok(())
    }
}

impl MediaObject for PluginSampleFilter {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn type_name(&self) -> &'static str {
        PLUGIN_SAMPLE_TYPE
    }

    fn pipeline(&self) -> &PipelineHandle {
        &self.pipeline
    }

    fn connect(&self, event_type: &str, handler: Arc<dyn EventHandler>) -> bool {
        self.subscribe(event_type, handler).is_some()
    }

    fn invoke(&self, method: &str, params: &Value) -> Result<Value, InvokeError> {
        Self::dispatch(self, method, params)
    }

    fn property(&self, name: &str) -> Option<Value> {
        let settings = self.settings();
        match name {
            "id" => Some(Value::from(self.id.as_str())),
            "filterType" => Some(Value::from(settings.filter_type())),
            "edgeThreshold" => Some(Value::from(settings.edge_threshold())),
            "name" => Some(Value::from(self.name())),
            "mediaPipeline" => Some(Value::from(self.pipeline.as_str())),
            "creationTime" => Some(Value::from(self.creation_time())),
            _ => None,
        }
    }

    /// Writer mode: identity plus every registered field. Reader mode:
    /// restore configuration from the serializer.
    fn serialize(&self, serializer: &mut JsonSerializer) -> Result<(), SerializationError> {
        if serializer.is_writer() {
            serialize_fields(self, PLUGIN_SAMPLE_FIELDS, serializer)
        } else {
            self.restore(serializer)
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
