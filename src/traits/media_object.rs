// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::{InvokeError, SerializationError};
use crate::pipeline::{ObjectId, PipelineHandle};
use crate::serialization::JsonSerializer;
use crate::traits::EventHandler;

/// The host-facing surface every media object exposes.
///
/// These are the calls a remote client reaches through the media set:
/// event subscription, generic method invocation, and serialization.
pub trait MediaObject: Send + Sync {
    fn id(&self) -> &ObjectId;

    /// Registered type name, used to find the object's dispatcher.
    fn type_name(&self) -> &'static str;

    /// Pipeline this object lives in.
    fn pipeline(&self) -> &PipelineHandle;

    /// Subscribe `handler` to `event_type`. Returns `false` when the event
    /// is not one this object raises.
    fn connect(&self, event_type: &str, handler: Arc<dyn EventHandler>) -> bool;

    /// Invoke `method` on this object with a JSON parameter bag.
    fn invoke(&self, method: &str, params: &Value) -> Result<Value, InvokeError>;

    /// Current value of a named property, if the object has it.
    fn property(&self, name: &str) -> Option<Value>;

    fn serialize(&self, serializer: &mut JsonSerializer) -> Result<(), SerializationError>;

    fn as_any(&self) -> &dyn Any;

    /// Owned counterpart of `as_any`, for `Arc::downcast`.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}
