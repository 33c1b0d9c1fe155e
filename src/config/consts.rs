/// Filter type selecting edge detection.
pub const FILTER_TYPE_EDGES: i32 = 0;
/// Filter type selecting plain grayscale conversion.
pub const FILTER_TYPE_GRAYSCALE: i32 = 1;
/// Mode used when neither the config nor the constructor picks one.
pub const DEFAULT_FILTER_TYPE: i32 = FILTER_TYPE_EDGES;
/// Default gradient threshold for edge detection.
pub const DEFAULT_EDGE_THRESHOLD: i32 = 125;
/// Lowest accepted edge threshold.
pub const MIN_EDGE_THRESHOLD: i32 = 0;
/// Highest accepted edge threshold; gradients are clipped to a byte.
pub const MAX_EDGE_THRESHOLD: i32 = 255;
/// Backend used when an element does not name one.
pub const DEFAULT_PROCESSOR: &str = "opencv_sample";
/// Registered type name of the sample filter.
pub const PLUGIN_SAMPLE_TYPE: &str = "PluginSampleFilter";
