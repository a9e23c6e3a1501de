//! Route tables, grouped by resource.

use crate::web::{handlers, state::AppState};
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Liveness probe.
#[must_use]
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Connected-account management.
#[must_use]
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts",
            get(handlers::accounts::list_accounts).post(handlers::accounts::connect_account),
        )
        .route("/accounts/:id", delete(handlers::accounts::disconnect_account))
}

/// Task authoring and publishing.
#[must_use]
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/tasks/:id",
            get(handlers::tasks::get_task).delete(handlers::tasks::delete_task),
        )
        .route("/tasks/:id/publish", post(handlers::tasks::publish_task))
}

/// AI drafting.
#[must_use]
pub fn ai_routes() -> Router<AppState> {
    Router::new().route("/ai/generate", post(handlers::ai::generate))
}
