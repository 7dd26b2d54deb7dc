// Typed errors with thiserror. Only the JS boundary can fail; the controller itself never does.

use thiserror::Error;

use crate::types::ItemId;

/// Feed engine error types.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid feed items: {0}")]
    InvalidItems(String),

    #[error("Duplicate item id: {0}")]
    DuplicateItemId(ItemId),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Serialization(err.to_string())
    }
}
