// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

use crate::config::FilterDefaults;
use crate::errors::{InvokeError, RegistryError, SerializationError};
use crate::observability::messages::pipeline::{
    ElementCreationFailed, ObjectReleased, PipelineCreated, PipelineReleased,
};
use crate::observability::messages::StructuredLog;
use crate::pipeline::{MediaPipeline, ObjectId, PipelineHandle};
use crate::registry::{FactoryContext, FactoryRegistry};
use crate::serialization::JsonSerializer;
use crate::traits::{EventHandler, MediaObject};

/// Owner of every pipeline and media object in a session.
///
/// Objects refer to their pipeline by [`PipelineHandle`] only; callers
/// refer to objects by [`ObjectId`]. Both are resolved here on each use,
/// so a released pipeline or object simply stops resolving.
pub struct MediaSet {
    registry: Arc<FactoryRegistry>,
    defaults: FilterDefaults,
    next_seq: AtomicU64,
    pipelines: RwLock<HashMap<PipelineHandle, MediaPipeline>>,
    objects: RwLock<HashMap<ObjectId, Arc<dyn MediaObject>>>,
}

impl MediaSet {
    pub fn new(registry: Arc<FactoryRegistry>, defaults: FilterDefaults) -> Self {
        Self {
            registry,
            defaults,
            next_seq: AtomicU64::new(0),
            pipelines: RwLock::new(HashMap::new()),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// A set backed by the builtin registry and default settings.
    pub fn with_builtin() -> Self {
        Self::new(Arc::new(FactoryRegistry::builtin()), FilterDefaults::default())
    }

    pub fn registry(&self) -> &FactoryRegistry {
        &self.registry
    }

    fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub fn create_pipeline(&self, name: &str) -> PipelineHandle {
        let handle = PipelineHandle::new(format!("{}_MediaPipeline", self.next_seq()));
        self.pipelines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(handle.clone(), MediaPipeline::new(handle.clone(), name));

        PipelineCreated {
            pipeline: handle.as_str(),
            name,
        }
        .log();
        handle
    }

    /// Snapshot of a pipeline's current state.
    pub fn pipeline(&self, handle: &PipelineHandle) -> Result<MediaPipeline, RegistryError> {
        self.pipelines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(handle)
            .cloned()
            .ok_or_else(|| RegistryError::PipelineNotFound(handle.to_string()))
    }

    pub fn pipeline_count(&self) -> usize {
        self.pipelines.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Construct a registered type inside `pipeline` and take ownership of it.
    pub fn create_element(
        &self,
        type_name: &str,
        params: &Value,
        pipeline: &PipelineHandle,
    ) -> Result<Arc<dyn MediaObject>, RegistryError> {
        let result = self.try_create_element(type_name, params, pipeline);
        if let Err(error) = &result {
            ElementCreationFailed {
                type_name,
                pipeline: pipeline.as_str(),
                reason: &error.to_string(),
            }
            .log();
        }
        result
    }

    fn try_create_element(
        &self,
        type_name: &str,
        params: &Value,
        pipeline: &PipelineHandle,
    ) -> Result<Arc<dyn MediaObject>, RegistryError> {
        // fail before spending a sequence number on a dead pipeline
        self.pipeline(pipeline)?;

        let context = FactoryContext {
            id: ObjectId::for_element(pipeline, self.next_seq(), type_name),
            pipeline: pipeline.clone(),
            defaults: self.defaults.clone(),
        };
        let object = self.registry.create(type_name, context, params)?;

        // the pipeline may have been released while the factory ran
        let mut pipelines = self.pipelines.write().unwrap_or_else(PoisonError::into_inner);
        let entry = pipelines
            .get_mut(pipeline)
            .ok_or_else(|| RegistryError::PipelineNotFound(pipeline.to_string()))?;
        entry.add_child(object.id().clone());
        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(object.id().clone(), Arc::clone(&object));

        Ok(object)
    }

    pub fn object(&self, id: &ObjectId) -> Result<Arc<dyn MediaObject>, RegistryError> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::ObjectNotFound(id.to_string()))
    }

    /// Resolve an object and downcast it to its concrete type.
    pub fn object_as<T: Any + Send + Sync>(&self, id: &ObjectId) -> Option<Arc<T>> {
        self.object(id).ok()?.into_any().downcast::<T>().ok()
    }

    pub fn release(&self, id: &ObjectId) -> Result<(), RegistryError> {
        let object = self
            .objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .ok_or_else(|| RegistryError::ObjectNotFound(id.to_string()))?;

        if let Some(pipeline) = self
            .pipelines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(object.pipeline())
        {
            pipeline.remove_child(id);
        }

        ObjectReleased {
            object_id: id.as_str(),
        }
        .log();
        Ok(())
    }

    /// Release a pipeline and every object in it. Returns how many children
    /// went with it.
    pub fn release_pipeline(&self, handle: &PipelineHandle) -> Result<usize, RegistryError> {
        let pipeline = self
            .pipelines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(handle)
            .ok_or_else(|| RegistryError::PipelineNotFound(handle.to_string()))?;

        let mut objects = self.objects.write().unwrap_or_else(PoisonError::into_inner);
        let released = pipeline
            .children()
            .iter()
            .filter(|child| objects.remove(*child).is_some())
            .count();

        PipelineReleased {
            pipeline: handle.as_str(),
            children: released,
        }
        .log();
        Ok(released)
    }

    /// Generic invocation through the target type's registered dispatcher.
    pub fn invoke(&self, id: &ObjectId, method: &str, params: &Value) -> Result<Value, InvokeError> {
        let object = self
            .object(id)
            .map_err(|_| InvokeError::ObjectNotFound(id.to_string()))?;
        let info = self
            .registry
            .get(object.type_name())
            .map_err(|_| InvokeError::ObjectNotFound(id.to_string()))?;
        (info.invoke)(object.as_ref(), method, params)
    }

    pub fn connect(
        &self,
        id: &ObjectId,
        event_type: &str,
        handler: Arc<dyn EventHandler>,
    ) -> Result<(), InvokeError> {
        let object = self
            .object(id)
            .map_err(|_| InvokeError::ObjectNotFound(id.to_string()))?;
        if object.connect(event_type, handler) {
            Ok(())
        } else {
            Err(InvokeError::EventNotSupported {
                type_name: object.type_name().to_string(),
                event: event_type.to_string(),
            })
        }
    }

    pub fn serialize_object(&self, id: &ObjectId) -> Result<Value, SerializationError> {
        let object = self
            .object(id)
            .map_err(|_| SerializationError::UnknownObject(id.to_string()))?;
        let mut serializer = JsonSerializer::writer();
        object.serialize(&mut serializer)?;
        Ok(serializer.into_value())
    }

    /// Reader side of the object-reference convention: a serialized object
    /// is resolved back to the live instance named by its `id`.
    pub fn resolve(&self, serializer: &JsonSerializer) -> Result<Arc<dyn MediaObject>, SerializationError> {
        let id: ObjectId = serializer.read_field("id")?;
        self.object(&id)
            .map_err(|_| SerializationError::UnknownObject(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::PLUGIN_SAMPLE_TYPE;
    use crate::element::PluginSampleFilter;
    use crate::events::MediaEvent;
    use async_trait::async_trait;
    use serde_json::json;

    struct Quiet;

    #[async_trait]
    impl EventHandler for Quiet {
        async fn handle(&self, _event: &MediaEvent) {}
    }

    #[test]
    fn test_create_element_registers_child() {
        let set = MediaSet::with_builtin();
        let pipeline = set.create_pipeline("main");

        let element = set
            .create_element(PLUGIN_SAMPLE_TYPE, &json!({"filterType": 1}), &pipeline)
            .unwrap();

        assert_eq!(element.pipeline(), &pipeline);
        assert!(element.id().as_str().starts_with(pipeline.as_str()));
        assert_eq!(set.pipeline(&pipeline).unwrap().children(), &[element.id().clone()]);
        assert!(set.object_as::<PluginSampleFilter>(element.id()).is_some());
    }

    #[test]
    fn test_create_element_errors() {
        let set = MediaSet::with_builtin();
        let pipeline = set.create_pipeline("main");

        assert_eq!(
            set.create_element("FaceOverlayFilter", &Value::Null, &pipeline)
                .err()
                .unwrap(),
            RegistryError::UnknownType("FaceOverlayFilter".to_string())
        );
        assert_eq!(
            set.create_element(PLUGIN_SAMPLE_TYPE, &Value::Null, &PipelineHandle::new("gone"))
                .err()
                .unwrap(),
            RegistryError::PipelineNotFound("gone".to_string())
        );
        assert!(set.pipeline(&pipeline).unwrap().children().is_empty());
    }

    #[test]
    fn test_invoke_through_set() {
        let set = MediaSet::with_builtin();
        let pipeline = set.create_pipeline("main");
        let element = set
            .create_element(PLUGIN_SAMPLE_TYPE, &Value::Null, &pipeline)
            .unwrap();

        set.invoke(element.id(), "setEdgeThreshold", &json!({"edgeValue": 10}))
            .unwrap();
        assert_eq!(
            set.invoke(element.id(), "getEdgeThreshold", &Value::Null).unwrap(),
            json!({"value": 10})
        );
        assert_eq!(
            set.invoke(&ObjectId::from("nope"), "getName", &Value::Null)
                .unwrap_err(),
            InvokeError::ObjectNotFound("nope".to_string())
        );
    }

    #[test]
    fn test_connect_through_set() {
        let set = MediaSet::with_builtin();
        let pipeline = set.create_pipeline("main");
        let element = set
            .create_element(PLUGIN_SAMPLE_TYPE, &Value::Null, &pipeline)
            .unwrap();

        assert!(set.connect(element.id(), "Error", Arc::new(Quiet)).is_ok());
        assert!(matches!(
            set.connect(element.id(), "Bogus", Arc::new(Quiet)),
            Err(InvokeError::EventNotSupported { .. })
        ));
    }

    #[test]
    fn test_release_object_and_pipeline() {
        let set = MediaSet::with_builtin();
        let pipeline = set.create_pipeline("main");
        let a = set.create_element(PLUGIN_SAMPLE_TYPE, &Value::Null, &pipeline).unwrap();
        let b = set.create_element(PLUGIN_SAMPLE_TYPE, &Value::Null, &pipeline).unwrap();

        set.release(a.id()).unwrap();
        assert!(set.object(a.id()).is_err());
        assert_eq!(set.pipeline(&pipeline).unwrap().children(), &[b.id().clone()]);
        assert!(set.release(a.id()).is_err());

        assert_eq!(set.release_pipeline(&pipeline).unwrap(), 1);
        assert!(set.object(b.id()).is_err());
        assert_eq!(set.pipeline_count(), 0);
        // the handle still exists but no longer resolves
        assert!(set.pipeline(&pipeline).is_err());
    }

    #[test]
    fn test_serialize_and_resolve_reference() {
        let set = MediaSet::with_builtin();
        let pipeline = set.create_pipeline("main");
        let element = set
            .create_element(PLUGIN_SAMPLE_TYPE, &json!({"edgeThreshold": 90}), &pipeline)
            .unwrap();

        let value = set.serialize_object(element.id()).unwrap();
        assert_eq!(value["edgeThreshold"], 90);
        assert_eq!(value["mediaPipeline"], pipeline.as_str());

        let reader = JsonSerializer::reader(value).unwrap();
        let resolved = set.resolve(&reader).unwrap();
        assert!(Arc::ptr_eq(&resolved, &element));

        set.release(element.id()).unwrap();
        assert!(matches!(
            set.resolve(&reader),
            Err(SerializationError::UnknownObject(_))
        ));
    }
}
