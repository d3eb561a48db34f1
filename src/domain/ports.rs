use super::play::PlayResponse;
use super::validation::ErrorResult;
use crate::error::Result;
use async_trait::async_trait;

/// Source of random outcomes for the game.
///
/// Implementations must be safe for concurrent callers and must not produce
/// correlated or repeated sequences under parallel draws.
pub trait OutcomeGenerator: Send + Sync {
    /// Draws an integer uniformly distributed over the inclusive range
    /// `[min, max]`. Fails with [`GameError::InvalidRange`] when `min > max`;
    /// the bounds are never silently swapped.
    ///
    /// [`GameError::InvalidRange`]: crate::error::GameError::InvalidRange
    fn get_in_range(&self, min: i32, max: i32) -> Result<i32>;
}

pub type OutcomeGeneratorBox = Box<dyn OutcomeGenerator>;

/// Delivery side of the message protocol. The core hands over typed values;
/// the publisher owns serialization and transport.
#[async_trait]
pub trait OutcomePublisher: Send + Sync {
    /// Publishes a round result to the results topic.
    async fn publish_response(&self, response: PlayResponse) -> Result<()>;

    /// Publishes a rejected request's violations to the errors queue.
    async fn publish_errors(&self, errors: ErrorResult) -> Result<()>;
}

pub type OutcomePublisherBox = Box<dyn OutcomePublisher>;
