//! Task authoring and publish endpoints.

use crate::account::domain::UserId;
use crate::task::{
    domain::{Task, TaskId},
    services::CreateTaskRequest,
};
use crate::web::{
    dto::{CreateTaskBody, PublishResponse, TaskDetailView, TaskView},
    error::{ApiError, ApiResult},
    extract::ActingUser,
    state::AppState,
};
use axum::Json;
use axum::extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
};
use axum::http::StatusCode;
use uuid::Uuid;

/// `GET /tasks`
///
/// Lists the acting user's tasks, newest first.
pub async fn list_tasks(
    State(state): State<AppState>,
    ActingUser(owner): ActingUser,
) -> ApiResult<Json<Vec<TaskView>>> {
    let tasks = state.tasks.list_for_owner(&owner).await?;
    Ok(Json(tasks.iter().map(TaskView::from).collect()))
}

/// `POST /tasks`
///
/// Creates a draft task.
pub async fn create_task(
    State(state): State<AppState>,
    ActingUser(owner): ActingUser,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskDetailView>)> {
    let Json(body) = payload?;
    let mut request = CreateTaskRequest::new(owner, body.title, body.content, body.platforms);
    if let Some(media_url) = body.media_url.filter(|url| !url.trim().is_empty()) {
        request = request.with_media_url(media_url);
    }

    let task = state.tasks.create(request).await?;
    Ok((StatusCode::CREATED, Json(TaskDetailView::from(&task))))
}

/// `GET /tasks/{id}`
pub async fn get_task(
    State(state): State<AppState>,
    ActingUser(owner): ActingUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<TaskDetailView>> {
    let Path(raw_id) = path?;
    let task = owned_task(&state, &owner, TaskId::from_uuid(raw_id)).await?;
    Ok(Json(TaskDetailView::from(&task)))
}

/// `DELETE /tasks/{id}`
///
/// A publish already in flight for the task finishes but its results are
/// discarded.
pub async fn delete_task(
    State(state): State<AppState>,
    ActingUser(owner): ActingUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path?;
    let task = owned_task(&state, &owner, TaskId::from_uuid(raw_id)).await?;
    state.tasks.delete(task.id()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /tasks/{id}/publish`
///
/// Publishes the task to every platform it targets and returns the
/// per-platform results. Platform failures are part of a successful
/// response; only orchestration failures map to error statuses.
pub async fn publish_task(
    State(state): State<AppState>,
    ActingUser(owner): ActingUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<PublishResponse>> {
    let Path(raw_id) = path?;
    let task = owned_task(&state, &owner, TaskId::from_uuid(raw_id)).await?;
    let summary = state.publisher.publish(task.id()).await?;
    Ok(Json(PublishResponse::from(&summary)))
}

/// Loads a task, hiding tasks owned by other users.
async fn owned_task(state: &AppState, owner: &UserId, id: TaskId) -> ApiResult<Task> {
    state
        .tasks
        .find(id)
        .await?
        .filter(|task| task.owner() == owner)
        .ok_or_else(|| ApiError::TaskNotFound(format!("task not found: {id}")))
}
