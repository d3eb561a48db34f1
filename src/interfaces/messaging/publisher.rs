use crate::domain::play::PlayResponse;
use crate::domain::ports::OutcomePublisher;
use crate::domain::validation::ErrorResult;
use crate::error::{GameError, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// In-process publisher delivering outcomes over tokio channels.
///
/// One sender feeds the results topic, the other the errors queue; whatever
/// sits on the receiving end (the transport) owns serialization and delivery
/// to subscribers.
pub struct ChannelPublisher {
    results: mpsc::Sender<PlayResponse>,
    errors: mpsc::Sender<ErrorResult>,
}

impl ChannelPublisher {
    pub fn new(results: mpsc::Sender<PlayResponse>, errors: mpsc::Sender<ErrorResult>) -> Self {
        Self { results, errors }
    }
}

#[async_trait]
impl OutcomePublisher for ChannelPublisher {
    async fn publish_response(&self, response: PlayResponse) -> Result<()> {
        self.results
            .send(response)
            .await
            .map_err(|_| GameError::ChannelClosed)
    }

    async fn publish_errors(&self, errors: ErrorResult) -> Result<()> {
        self.errors
            .send(errors)
            .await
            .map_err(|_| GameError::ChannelClosed)
    }
}
