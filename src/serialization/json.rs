// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured writer/reader used to externalize media objects.
//!
//! A `JsonSerializer` is either a writer, accumulating key/value pairs into
//! a JSON object, or a reader over an existing JSON object. Objects write
//! their identity (`id`, `type`) followed by their registered fields; the
//! media set resolves a reader back to a live object by its `id`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::SerializationError;
use crate::registry::FieldDescriptor;
use crate::traits::MediaObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SerializerMode {
    Writer,
    Reader,
}

#[derive(Debug, Clone)]
pub struct JsonSerializer {
    mode: SerializerMode,
    fields: Map<String, Value>,
}

impl JsonSerializer {
    pub fn writer() -> Self {
        Self {
            mode: SerializerMode::Writer,
            fields: Map::new(),
        }
    }

    pub fn reader(value: Value) -> Result<Self, SerializationError> {
        match value {
            Value::Object(fields) => Ok(Self {
                mode: SerializerMode::Reader,
                fields,
            }),
            other => Err(SerializationError::NotAnObject(other.to_string())),
        }
    }

    pub fn is_writer(&self) -> bool {
        self.mode == SerializerMode::Writer
    }

    pub fn write_field<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), SerializationError> {
        if !self.is_writer() {
            return Err(SerializationError::WrongMode("reader"));
        }
        let value = serde_json::to_value(value).map_err(|source| SerializationError::Field {
            field: key.to_string(),
            source,
        })?;
        self.fields.insert(key.to_string(), value);
        Ok(())
    }

    pub fn read_field<T: DeserializeOwned>(&self, key: &str) -> Result<T, SerializationError> {
        if self.is_writer() {
            return Err(SerializationError::WrongMode("writer"));
        }
        let value = self
            .fields
            .get(key)
            .ok_or_else(|| SerializationError::MissingField(key.to_string()))?;
        T::deserialize(value).map_err(|source| SerializationError::Field {
            field: key.to_string(),
            source,
        })
    }

    /// Deserialize the whole object, e.g. into a settings struct.
    pub fn read_all<T: DeserializeOwned>(&self) -> Result<T, SerializationError> {
        if self.is_writer() {
            return Err(SerializationError::WrongMode("writer"));
        }
        T::deserialize(Value::Object(self.fields.clone())).map_err(|source| {
            SerializationError::Field {
                field: "<object>".to_string(),
                source,
            }
        })
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Write `id`, `type` and every descriptor-listed property of `object`.
pub fn serialize_fields(
    object: &dyn MediaObject,
    fields: &[FieldDescriptor],
    serializer: &mut JsonSerializer,
) -> Result<(), SerializationError> {
    serializer.write_field("id", object.id())?;
    serializer.write_field("type", object.type_name())?;
    for field in fields {
        let value = object
            .property(field.name)
            .ok_or_else(|| SerializationError::MissingField(field.name.to_string()))?;
        serializer.write_field(field.name, &value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_writer_collects_fields() {
        let mut serializer = JsonSerializer::writer();
        serializer.write_field("filterType", &1).unwrap();
        serializer.write_field("name", "edges").unwrap();

        assert_eq!(
            serializer.into_value(),
            json!({"filterType": 1, "name": "edges"})
        );
    }

    #[test]
    fn test_reader_rejects_writes_and_missing_fields() {
        let mut serializer = JsonSerializer::reader(json!({"edgeThreshold": 30})).unwrap();

        assert_eq!(serializer.read_field::<i32>("edgeThreshold").unwrap(), 30);
        assert!(matches!(
            serializer.read_field::<i32>("filterType"),
            Err(SerializationError::MissingField(f)) if f == "filterType"
        ));
        assert!(matches!(
            serializer.write_field("x", &1),
            Err(SerializationError::WrongMode("reader"))
        ));
    }

    #[test]
    fn test_read_all_ignores_identity_fields() {
        let serializer = JsonSerializer::reader(json!({
            "id": "p/1_PluginSampleFilter",
            "type": "PluginSampleFilter",
            "filterType": 1,
            "edgeThreshold": 30,
        }))
        .unwrap();

        let settings: crate::element::FilterSettings = serializer.read_all().unwrap();
        assert_eq!(settings, crate::element::FilterSettings::new(1, 30).unwrap());
        assert!(matches!(
            JsonSerializer::writer().read_all::<Value>(),
            Err(SerializationError::WrongMode("writer"))
        ));
    }

    #[test]
    fn test_reader_requires_object() {
        assert!(matches!(
            JsonSerializer::reader(json!([1, 2])),
            Err(SerializationError::NotAnObject(_))
        ));
    }

    #[test]
    fn test_read_field_type_mismatch() {
        let serializer = JsonSerializer::reader(json!({"edgeThreshold": "high"})).unwrap();
        assert!(matches!(
            serializer.read_field::<i32>("edgeThreshold"),
            Err(SerializationError::Field { field, .. }) if field == "edgeThreshold"
        ));
    }
}
