use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::store::StoreError;
use crate::ServiceState;

/// Serve the named file as an attachment. Archives come back through
/// this route like any other stored file.
pub async fn handler(
    State(state): State<ServiceState>,
    Path(filename): Path<String>,
) -> Result<Response, DownloadError> {
    let content = state.store().read_bytes(&filename).await?;

    let mime = mime_guess::from_path(&filename).first_or_octet_stream();
    let disposition = format!("attachment; filename=\"{}\"", filename);

    Ok((
        http::StatusCode::OK,
        [
            (axum::http::header::CONTENT_TYPE, mime.as_ref()),
            (axum::http::header::CONTENT_DISPOSITION, disposition.as_str()),
        ],
        content,
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        let DownloadError::Store(e) = self;
        if e.is_not_found() {
            (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "File not found."})),
            )
                .into_response()
        } else {
            tracing::error!("download failed: {}", e);
            (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
