use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::relay,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Unparseable bodies and non-string messages count as a missing message.
    // A body that cannot be read keeps axum's own status, e.g. 413.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection @ JsonRejection::BytesRejection(_)) => {
            return Err(AppError::BodyRejected(rejection));
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "invalid chat body");
            return Err(AppError::InvalidInput);
        }
    };

    let reply = relay::handle(state.model.as_ref(), payload.message.as_deref()).await?;
    Ok(Json(ChatResponse { reply }))
}
