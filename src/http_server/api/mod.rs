use axum::Router;
use http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use http::Method;
use tower_http::cors::{Any, CorsLayer};

pub mod client;
pub mod files;
pub mod projects;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    // Cross-origin requests are permitted from any origin.
    let cors_layer = CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(vec![ACCEPT, CONTENT_TYPE, ORIGIN])
        .allow_origin(Any)
        .allow_credentials(false);

    Router::new()
        .nest("/files", files::router(state.clone()))
        .nest("/projects", projects::router(state.clone()))
        .with_state(state)
        .layer(cors_layer)
}
