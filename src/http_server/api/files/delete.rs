use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::store::StoreError;
use crate::ServiceState;

pub async fn handler(
    State(state): State<ServiceState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, DeleteError> {
    state.store().remove(&filename).await?;

    // 204 with an empty body on success.
    Ok(http::StatusCode::NO_CONTENT.into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for DeleteError {
    fn into_response(self) -> Response {
        let DeleteError::Store(e) = self;
        if e.is_not_found() {
            (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "File not found."})),
            )
                .into_response()
        } else {
            tracing::error!("delete failed: {}", e);
            (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
