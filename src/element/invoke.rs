// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Generic method dispatch for the plugin-sample filter.
//!
//! Remote callers address methods by name with a JSON parameter bag.
//! Getters answer `{"value": ...}`; setters answer `{}`.

use serde_json::{json, Value};

use super::PluginSampleFilter;
use crate::config::consts::PLUGIN_SAMPLE_TYPE;
use crate::errors::InvokeError;
use crate::observability::messages::element::InvokeFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::MediaObject;

impl PluginSampleFilter {
    /// Invoke `method` on `target`, which must be a `PluginSampleFilter`.
    pub fn dispatch(target: &dyn MediaObject, method: &str, params: &Value) -> Result<Value, InvokeError> {
        let filter = target
            .as_any()
            .downcast_ref::<PluginSampleFilter>()
            .ok_or_else(|| InvokeError::TypeMismatch {
                object_id: target.id().to_string(),
                expected: PLUGIN_SAMPLE_TYPE.to_string(),
                actual: target.type_name().to_string(),
            })?;

        let result = filter.invoke_method(method, params);
        if let Err(error) = &result {
            InvokeFailed {
                object_id: filter.id().as_str(),
                method,
                error,
            }
            .log();
        }
        result
    }

    fn invoke_method(&self, method: &str, params: &Value) -> Result<Value, InvokeError> {
        match method {
            "setFilterType" => {
                let value = int_param(method, params, "filterType")?;
                self.set_filter_type(value)
                    .map_err(|e| InvokeError::invalid_params(method, e.to_string()))?;
                Ok(json!({}))
            }
            "setEdgeThreshold" => {
                let value = int_param(method, params, "edgeValue")?;
                self.set_edge_threshold(value)
                    .map_err(|e| InvokeError::invalid_params(method, e.to_string()))?;
                Ok(json!({}))
            }
            "setName" => {
                let name = str_param(method, params, "name")?;
                self.set_name(name);
                Ok(json!({}))
            }
            "getFilterType" => Ok(json!({ "value": self.settings().filter_type() })),
            "getEdgeThreshold" => Ok(json!({ "value": self.settings().edge_threshold() })),
            "getName" => Ok(json!({ "value": self.name() })),
            "getId" => Ok(json!({ "value": self.id().as_str() })),
            "getMediaPipeline" => Ok(json!({ "value": self.pipeline().as_str() })),
            "getCreationTime" => Ok(json!({ "value": self.creation_time() })),
            _ => Err(InvokeError::MethodNotFound {
                object_id: self.id().to_string(),
                method: method.to_string(),
            }),
        }
    }
}

fn int_param(method: &str, params: &Value, key: &str) -> Result<i32, InvokeError> {
    let raw = params
        .get(key)
        .ok_or_else(|| InvokeError::invalid_params(method, format!("missing '{}'", key)))?;
    raw.as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| InvokeError::invalid_params(method, format!("'{}' must be a 32-bit integer, got {}", key, raw)))
}

fn str_param<'a>(method: &str, params: &'a Value, key: &str) -> Result<&'a str, InvokeError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| InvokeError::invalid_params(method, format!("'{}' must be a string", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::PassthroughProcessor;
    use crate::element::FilterSettings;
    use crate::pipeline::{ObjectId, PipelineHandle};
    use std::sync::Arc;

    fn filter() -> PluginSampleFilter {
        PluginSampleFilter::new(
            ObjectId::from("p/1_PluginSampleFilter"),
            PipelineHandle::new("p"),
            FilterSettings::default(),
            Arc::new(PassthroughProcessor::new()),
        )
    }

    #[test]
    fn test_setters_and_getters() {
        let filter = filter();

        assert_eq!(
            filter.invoke("setFilterType", &json!({"filterType": 1})).unwrap(),
            json!({})
        );
        assert_eq!(
            filter.invoke("setEdgeThreshold", &json!({"edgeValue": 33})).unwrap(),
            json!({})
        );

        assert_eq!(
            filter.invoke("getFilterType", &Value::Null).unwrap(),
            json!({"value": 1})
        );
        assert_eq!(
            filter.invoke("getEdgeThreshold", &json!({})).unwrap(),
            json!({"value": 33})
        );
        assert_eq!(filter.settings(), FilterSettings::new(1, 33).unwrap());
    }

    #[test]
    fn test_name_and_identity_methods() {
        let filter = filter();
        filter.invoke("setName", &json!({"name": "sobel"})).unwrap();

        assert_eq!(filter.invoke("getName", &Value::Null).unwrap()["value"], "sobel");
        assert_eq!(
            filter.invoke("getId", &Value::Null).unwrap()["value"],
            "p/1_PluginSampleFilter"
        );
        assert_eq!(filter.invoke("getMediaPipeline", &Value::Null).unwrap()["value"], "p");
        assert!(filter.invoke("getCreationTime", &Value::Null).unwrap()["value"].is_u64());
    }

    #[test]
    fn test_unknown_method() {
        let err = filter().invoke("setFaceImage", &json!({})).unwrap_err();
        assert_eq!(err.code(), -32601);
        assert!(matches!(err, InvokeError::MethodNotFound { method, .. } if method == "setFaceImage"));
    }

    #[test]
    fn test_malformed_params() {
        let filter = filter();
        for params in [
            json!({}),
            json!({"filterType": "one"}),
            json!({"filterType": 1.5}),
            json!({"filterType": 4_000_000_000i64}),
        ] {
            let err = filter.invoke("setFilterType", &params).unwrap_err();
            assert_eq!(err.code(), -32602, "params: {}", params);
        }
        assert!(filter.invoke("setName", &json!({"name": 3})).is_err());
    }

    #[test]
    fn test_out_of_range_value_is_invalid_params() {
        let filter = filter();
        let err = filter
            .invoke("setEdgeThreshold", &json!({"edgeValue": 300}))
            .unwrap_err();
        assert!(matches!(err, InvokeError::InvalidParams { .. }));
        assert_eq!(filter.settings().edge_threshold(), 125);
    }
}
