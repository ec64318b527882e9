use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::AppState;

/// Returned when an error escapes the chat service itself. Provider
/// failures never reach this path; the assistant folds those into its
/// reply text.
const BACKEND_APOLOGY: &str =
    "Sorry, I'm having trouble connecting to my backend. Please try again later.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReply>) {
    match state.chat.respond(&request.message).await {
        Ok(response) => (StatusCode::OK, Json(ChatReply { response })),
        Err(e) => {
            error!("Server error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply {
                    response: BACKEND_APOLOGY.to_string(),
                }),
            )
        }
    }
}
