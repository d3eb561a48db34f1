use crate::application::engine::GameEngine;
use crate::domain::play::PlayPayload;
use crate::domain::ports::OutcomePublisherBox;
use crate::domain::validation::validate;
use crate::error::Result;
use tokio::sync::mpsc;

/// Boundary between the message transport and the game core.
///
/// The gateway consumes play payloads from the inbound channel, gates them
/// through validation, and routes the typed outcome: responses to the results
/// topic, rule violations to the errors queue. Requests are independent, so
/// the loop carries no state between them.
pub struct MessageGateway {
    engine: GameEngine,
    inbound: mpsc::Receiver<PlayPayload>,
    publisher: OutcomePublisherBox,
}

impl MessageGateway {
    pub fn new(
        engine: GameEngine,
        inbound: mpsc::Receiver<PlayPayload>,
        publisher: OutcomePublisherBox,
    ) -> Self {
        Self {
            engine,
            inbound,
            publisher,
        }
    }

    /// Serves play messages until the inbound channel closes.
    ///
    /// Validation failures are published and the loop continues; an engine
    /// error is a defect and aborts the run.
    pub async fn run(mut self) -> Result<()> {
        while let Some(payload) = self.inbound.recv().await {
            self.dispatch(payload).await?;
        }
        Ok(())
    }

    async fn dispatch(&self, payload: PlayPayload) -> Result<()> {
        match validate(&payload) {
            Ok(request) => {
                let response = self.engine.handle(&request)?;
                self.publisher.publish_response(response).await
            }
            Err(errors) => {
                log::warn!(
                    "rejected play request with {} validation error(s)",
                    errors.errors.len()
                );
                self.publisher.publish_errors(errors).await
            }
        }
    }
}
