use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::http_server::api::client::ApiRequest;
use crate::store::StoreError;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct CreateRequest {
    /// Name for the file, used verbatim as a path under the store root
    #[arg(long)]
    pub filename: String,

    /// Full content to write
    #[arg(long)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    pub message: String,
}

/// Create always writes: an existing file with the same name is
/// silently overwritten.
pub async fn handler(
    State(state): State<ServiceState>,
    Json(req): Json<CreateRequest>,
) -> Result<impl IntoResponse, CreateError> {
    tracing::debug!(filename = %req.filename, "create file");

    state
        .store()
        .write(&req.filename, req.content.as_bytes())
        .await?;

    Ok((
        http::StatusCode::CREATED,
        Json(CreateResponse {
            message: "File created.".to_string(),
        }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for CreateError {
    fn into_response(self) -> Response {
        tracing::error!("create failed: {}", self);
        let CreateError::Store(e) = self;
        (
            http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for CreateRequest {
    type Response = CreateResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/files").expect("static route must join");
        client.post(full_url).json(&self)
    }
}
