use axum::extract::{Json, Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadResponse {
    pub filename: String,
    pub content: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ReadError> {
    let content = state.store().read(&filename).await?;

    Ok((
        http::StatusCode::OK,
        Json(ReadResponse { filename, content }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ReadError {
    fn into_response(self) -> Response {
        let ReadError::Store(e) = self;
        if e.is_not_found() {
            (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "File not found."})),
            )
                .into_response()
        } else {
            tracing::error!("read failed: {}", e);
            (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
