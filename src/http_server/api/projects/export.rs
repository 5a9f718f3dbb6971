use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::http_server::api::client::ApiRequest;
use crate::http_server::Config;
use crate::store::StoreError;
use crate::ServiceState;

/// The export operation takes no parameters: it always archives the
/// entire managed directory.
#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct ExportRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub download_url: String,
}

#[axum::debug_handler]
pub async fn handler(
    State(state): State<ServiceState>,
    Extension(config): Extension<Config>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ExportError> {
    let archive_name = state.store().archive().await?;

    // Mirror the request's own Host when present so the URL works from
    // wherever the client is; fall back to the configured hostname.
    let download_url = match headers
        .get(http::header::HOST)
        .and_then(|v| v.to_str().ok())
    {
        Some(host) => format!("http://{}/api/files/{}/download", host, archive_name),
        None => format!("{}api/files/{}/download", config.hostname, archive_name),
    };

    Ok((
        http::StatusCode::OK,
        Json(ExportResponse { download_url }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ExportError {
    fn into_response(self) -> Response {
        tracing::error!("export failed: {}", self);
        let ExportError::Store(e) = self;
        (
            http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for ExportRequest {
    type Response = ExportResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join("/api/projects/export")
            .expect("static route must join");
        client.post(full_url)
    }
}
