// src/services/relay.rs
use super::model::TextModel;
use super::prompt::build_prompt;
use crate::error::AppError;

/// Validate the message, wrap it in the persona prompt and ask the model.
///
/// The model is never called for an absent or empty message. Any other
/// message, whitespace included, is relayed as sent. Any model failure
/// collapses into `AppError::ModelUnavailable`.
pub async fn handle(model: &dyn TextModel, message: Option<&str>) -> Result<String, AppError> {
    let message = match message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(AppError::InvalidInput),
    };

    let prompt = build_prompt(message);
    let reply = model.generate(&prompt).await?;
    Ok(reply)
}
