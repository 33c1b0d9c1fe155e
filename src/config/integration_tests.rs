#[cfg(test)]
mod integration_tests {
    use crate::config::{load_and_validate_config, RuntimeBuilder};
    use crate::element::{FilterSettings, PluginSampleFilter};
    use serde_json::{json, Value};

    /// Test that the shipped YAML configuration loads and validates
    #[test]
    fn test_sample_yaml_loading() {
        let config = load_and_validate_config("configs/plugin-sample.yaml").unwrap();

        assert_eq!(config.defaults.edge_threshold, 125);
        assert_eq!(config.pipelines.len(), 1);
        assert_eq!(config.elements.len(), 2);
        assert_eq!(config.elements[0].id, "edges");
        assert_eq!(config.elements[1].filter_type, Some(1));
    }

    /// Test building the runtime from the shipped YAML configuration
    #[test]
    fn test_build_runtime_from_yaml() {
        let config = load_and_validate_config("configs/plugin-sample.yaml").unwrap();
        let runtime = RuntimeBuilder::from_config(&config).unwrap();

        let main = runtime.pipeline("main").unwrap();
        let pipeline = runtime.media_set.pipeline(main).unwrap();
        assert_eq!(pipeline.name, "Sample pipeline");
        assert_eq!(pipeline.children().len(), 2);

        let edges = runtime
            .media_set
            .object_as::<PluginSampleFilter>(runtime.element("edges").unwrap())
            .unwrap();
        assert_eq!(edges.settings(), FilterSettings::default());
        assert_eq!(edges.name(), "edges");

        let gray = runtime
            .media_set
            .object_as::<PluginSampleFilter>(runtime.element("gray").unwrap())
            .unwrap();
        assert_eq!(gray.settings(), FilterSettings::new(1, 60).unwrap());
        assert_eq!(gray.name(), "gray-filter");
    }

    /// Test that the sample invocation script applies cleanly up to its
    /// deliberately rejected last call
    #[test]
    fn test_sample_invocations() {
        let config = load_and_validate_config("configs/plugin-sample.yaml").unwrap();
        let runtime = RuntimeBuilder::from_config(&config).unwrap();
        let script: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string("configs/invocations.json").unwrap())
                .unwrap();

        let results: Vec<_> = script
            .iter()
            .map(|call| {
                let id = runtime.element(call["object"].as_str().unwrap()).unwrap();
                runtime.media_set.invoke(
                    id,
                    call["method"].as_str().unwrap(),
                    &call["params"],
                )
            })
            .collect();

        assert_eq!(results[1].as_ref().unwrap(), &json!({"value": 90}));
        assert_eq!(results[3].as_ref().unwrap(), &json!({"value": "gray-filter"}));
        assert!(results[4].is_err());
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 4);
    }
}
