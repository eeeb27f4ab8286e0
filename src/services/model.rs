// src/services/model.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(String),

    #[error("model API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("rate limited by model API")]
    RateLimited,

    #[error("generation blocked: {0}")]
    Blocked(String),

    #[error("failed to decode model response: {0}")]
    Decode(String),
}

/// A text-in/text-out generative model.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
