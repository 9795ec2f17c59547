pub mod logging;
pub mod routes;
pub mod store;

use axum::{Router, routing::get};

use crate::routes::AppState;

/// Build the API router: health check plus the two feedback endpoints.
/// The caller layers CORS, tracing, and static-file fallback on top.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/api/feedback",
            get(routes::list_feedback).post(routes::create_feedback),
        )
        .with_state(state)
}
