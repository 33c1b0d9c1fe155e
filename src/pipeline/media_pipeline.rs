use std::time::SystemTime;

use crate::pipeline::{ObjectId, PipelineHandle};

/// A pipeline as tracked by the media set: identity plus its children.
#[derive(Debug, Clone)]
pub struct MediaPipeline {
    pub handle: PipelineHandle,
    pub name: String,
    pub created_at: SystemTime,
    children: Vec<ObjectId>,
}

impl MediaPipeline {
    pub fn new(handle: PipelineHandle, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
            created_at: SystemTime::now(),
            children: Vec::new(),
        }
    }

    /// Children in creation order.
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    pub(crate) fn add_child(&mut self, id: ObjectId) {
        self.children.push(id);
    }

    pub(crate) fn remove_child(&mut self, id: &ObjectId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| c != id);
        before != self.children.len()
    }
}
