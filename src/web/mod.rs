//! REST API over the task, account, publish and content services.
//!
//! JSON bodies use camelCase. The acting user is named by the `x-user-id`
//! header and defaults to `default`. Failures are rendered by
//! [`ApiError`] as `{"error": {"code", "message"}}`.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use extract::{ActingUser, USER_HEADER};
pub use state::AppState;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the application router with every route and the shared middleware.
#[must_use]
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health_routes())
        .merge(routes::account_routes())
        .merge(routes::task_routes())
        .merge(routes::ai_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests;
