// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::model::ModelError;

pub const INVALID_INPUT_MESSAGE: &str = "Mensagem do utilizador é obrigatória.";
pub const MODEL_UNAVAILABLE_MESSAGE: &str =
    "Ocorreu um erro ao processar a sua mensagem. Por favor, tente novamente.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("user message is required")]
    InvalidInput,

    #[error("model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),

    /// The body could not be read at all, e.g. it exceeds the size limit.
    #[error("request body rejected: {0}")]
    BodyRejected(JsonRejection),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput => {
                tracing::debug!("rejected chat request without a message");
                (StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE)
            }
            // The cause stays server-side.
            AppError::ModelUnavailable(cause) => {
                tracing::error!(error = %cause, "error communicating with the Gemini API");
                (StatusCode::INTERNAL_SERVER_ERROR, MODEL_UNAVAILABLE_MESSAGE)
            }
            AppError::BodyRejected(rejection) => {
                tracing::debug!(%rejection, "chat body could not be read");
                return rejection.into_response();
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
