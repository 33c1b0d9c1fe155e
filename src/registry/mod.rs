// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Type-name registry of media object factories.
//!
//! Every creatable type registers a [`ModuleInfo`]: how to build an
//! instance, how to dispatch generic `invoke` calls against it, which
//! fields its serialized form carries, and which events it raises. The
//! registry is populated by ordinary code (`FactoryRegistry::builtin`)
//! before it is shared, so lookups need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::config::FilterDefaults;
use crate::errors::{InvokeError, RegistryError};
use crate::events::EventType;
use crate::pipeline::{ObjectId, PipelineHandle};
use crate::traits::MediaObject;

/// Everything a factory gets besides its constructor parameters.
#[derive(Debug, Clone)]
pub struct FactoryContext {
    pub id: ObjectId,
    pub pipeline: PipelineHandle,
    pub defaults: FilterDefaults,
}

pub type Factory = fn(FactoryContext, &Value) -> Result<Arc<dyn MediaObject>, RegistryError>;

/// Dispatches `invoke(target, method, params)` for one type.
pub type Dispatcher = fn(&dyn MediaObject, &str, &Value) -> Result<Value, InvokeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    String,
    ObjectRef,
}

/// A serialized field of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

#[derive(Clone)]
pub struct ModuleInfo {
    pub type_name: &'static str,
    pub factory: Factory,
    pub invoke: Dispatcher,
    pub fields: &'static [FieldDescriptor],
    /// Events an instance accepts in `connect`.
    pub events: &'static [EventType],
}

impl std::fmt::Debug for ModuleInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleInfo")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("events", &self.events)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct FactoryRegistry {
    modules: HashMap<&'static str, ModuleInfo>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every type this crate ships.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .modules
            .insert(crate::element::PLUGIN_SAMPLE_MODULE.type_name, crate::element::PLUGIN_SAMPLE_MODULE);
        registry
    }

    pub fn register(&mut self, info: ModuleInfo) -> Result<(), RegistryError> {
        if self.modules.contains_key(info.type_name) {
            return Err(RegistryError::DuplicateType(info.type_name.to_string()));
        }
        self.modules.insert(info.type_name, info);
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Result<&ModuleInfo, RegistryError> {
        self.modules
            .get(type_name)
            .ok_or_else(|| RegistryError::UnknownType(type_name.to_string()))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.modules.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.modules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn fields(&self, type_name: &str) -> Result<&'static [FieldDescriptor], RegistryError> {
        self.get(type_name).map(|info| info.fields)
    }

    pub fn create(
        &self,
        type_name: &str,
        context: FactoryContext,
        params: &Value,
    ) -> Result<Arc<dyn MediaObject>, RegistryError> {
        let info = self.get(type_name)?;
        (info.factory)(context, params)
    }
}
