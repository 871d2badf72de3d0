use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FETCH_FAILED: &str = "Failed to fetch data";
pub const UPDATE_FAILED: &str = "Failed to update data";

/// Body of every failed endpoint response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn fetch_failed() -> Self {
        Self::new(FETCH_FAILED)
    }

    pub fn update_failed() -> Self {
        Self::new(UPDATE_FAILED)
    }
}
