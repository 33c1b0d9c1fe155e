pub mod event_handler;
pub mod media_object;
pub mod processor;

pub use event_handler::EventHandler;
pub use media_object::MediaObject;
pub use processor::FrameProcessor;
