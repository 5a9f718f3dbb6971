use axum::routing::{get, post};
use axum::Router;

use crate::ServiceState;

pub mod create;
pub mod delete;
pub mod download;
pub mod read;
pub mod update;

// Re-export for convenience
pub use create::CreateRequest;
pub use read::ReadResponse;
pub use update::UpdateRequest;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/", post(create::handler))
        .route(
            "/:filename",
            get(read::handler)
                .put(update::handler)
                .delete(delete::handler),
        )
        .route("/:filename/download", get(download::handler))
        .with_state(state)
}
