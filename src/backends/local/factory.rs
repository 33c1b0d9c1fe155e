use std::sync::Arc;

use super::processors::*;
use crate::traits::FrameProcessor;

/// Factory for creating local (in-process) frame processors
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance by implementation name
    ///
    /// - "opencv_sample" -> OpenCvSampleProcessor (edges or grayscale, by filter type)
    /// - "grayscale" -> GrayscaleProcessor
    /// - "passthrough" -> PassthroughProcessor
    pub fn create_processor(impl_name: &str) -> Result<Arc<dyn FrameProcessor>, String> {
        match impl_name {
            "opencv_sample" => Ok(Arc::new(OpenCvSampleProcessor::new())),
            "grayscale" => Ok(Arc::new(GrayscaleProcessor::new())),
            "passthrough" => Ok(Arc::new(PassthroughProcessor::new())),
            _ => Err(format!(
                "Unknown local processor implementation: '{}'",
                impl_name
            )),
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["opencv_sample", "grayscale", "passthrough"]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(impl_name: &str) -> bool {
        Self::list_available_implementations().contains(&impl_name)
    }
}
