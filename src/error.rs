use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid outcome range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
    #[error("outbound channel closed before delivery")]
    ChannelClosed,
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
