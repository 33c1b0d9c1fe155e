use async_trait::async_trait;

use crate::events::MediaEvent;

/// Receiver of events raised by a media object.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &MediaEvent);
}
