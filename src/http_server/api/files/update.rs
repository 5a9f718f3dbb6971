use axum::extract::{Json, Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Replacement content for an existing file
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
}

/// Update refuses when the file is missing; it never creates. That is
/// the only behavioral difference from create.
pub async fn handler(
    State(state): State<ServiceState>,
    Path(filename): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> Result<impl IntoResponse, UpdateError> {
    state
        .store()
        .update(&filename, req.content.as_bytes())
        .await?;

    Ok((
        http::StatusCode::OK,
        Json(UpdateResponse {
            message: "File updated.".to_string(),
        }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for UpdateError {
    fn into_response(self) -> Response {
        let UpdateError::Store(e) = self;
        if e.is_not_found() {
            (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "File not found."})),
            )
                .into_response()
        } else {
            tracing::error!("update failed: {}", e);
            (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
