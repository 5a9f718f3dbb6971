use axum::routing::post;
use axum::Router;

use crate::ServiceState;

pub mod export;

pub use export::ExportRequest;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/export", post(export::handler))
        .with_state(state)
}
