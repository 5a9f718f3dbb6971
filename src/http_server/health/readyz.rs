use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio::time::timeout;

use crate::ServiceState;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Ready means the managed directory is reachable on disk.
pub async fn handler(State(state): State<ServiceState>) -> Response {
    match timeout(HEALTH_CHECK_TIMEOUT, state.store().probe()).await {
        Ok(Ok(())) => {
            let msg = serde_json::json!({"status": "ok"});
            (StatusCode::OK, Json(msg)).into_response()
        }
        Ok(Err(e)) => {
            let msg = serde_json::json!({
                "status": "failure",
                "message": format!("store unavailable: {}", e)
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(msg)).into_response()
        }
        Err(_) => {
            let msg = serde_json::json!({
                "status": "failure",
                "message": "health check timed out"
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(msg)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::FileStore;

    #[tokio::test]
    async fn test_ready_when_store_dir_exists() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = FileStore::open(temp.path().join("files")).unwrap();
        let state = ServiceState::new(store);

        let response = handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unready_when_store_dir_removed() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = FileStore::open(temp.path().join("files")).unwrap();
        let state = ServiceState::new(store);

        std::fs::remove_dir_all(temp.path().join("files")).unwrap();

        let response = handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
