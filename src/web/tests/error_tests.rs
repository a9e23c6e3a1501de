//! Status and body mapping of API errors.

use crate::account::{
    domain::AccountId, ports::AccountRepositoryError, services::AccountRegistryError,
};
use crate::content::{domain::ContentDomainError, services::ContentAssistError};
use crate::publish::services::PublishError;
use crate::task::{
    domain::{TaskDomainError, TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::TaskLifecycleError,
};
use crate::web::ApiError;
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case(ApiError::TaskNotFound(String::new()), StatusCode::NOT_FOUND, "TASK_NOT_FOUND")]
#[case(ApiError::AccountNotFound(String::new()), StatusCode::NOT_FOUND, "ACCOUNT_NOT_FOUND")]
#[case(ApiError::PublishConflict(String::new()), StatusCode::CONFLICT, "PUBLISH_CONFLICT")]
#[case(
    ApiError::EmptyPlatformSet(String::new()),
    StatusCode::UNPROCESSABLE_ENTITY,
    "EMPTY_PLATFORM_SET"
)]
#[case(ApiError::Validation(String::new()), StatusCode::BAD_REQUEST, "VALIDATION_FAILED")]
#[case(
    ApiError::Internal(String::new()),
    StatusCode::INTERNAL_SERVER_ERROR,
    "INTERNAL_ERROR"
)]
fn errors_map_to_status_and_code(
    #[case] error: ApiError,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    assert_eq!(error.status(), status);
    assert_eq!(error.code(), code);
}

#[rstest]
#[case(PublishError::TaskNotFound(TaskId::new()), "TASK_NOT_FOUND")]
#[case(PublishError::Conflict(TaskId::new()), "PUBLISH_CONFLICT")]
#[case(PublishError::EmptyPlatformSet(TaskId::new()), "EMPTY_PLATFORM_SET")]
#[case(PublishError::SummaryUnavailable(TaskId::new()), "INTERNAL_ERROR")]
fn publish_errors_are_classified(#[case] error: PublishError, #[case] code: &str) {
    assert_eq!(ApiError::from(error).code(), code);
}

#[rstest]
fn task_errors_are_classified() {
    let id = TaskId::new();

    let blank = ApiError::from(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle));
    let missing = ApiError::from(TaskLifecycleError::Repository(
        TaskRepositoryError::NotFound(id),
    ));
    let mismatch = ApiError::from(TaskRepositoryError::StatusMismatch {
        task_id: id,
        expected: TaskStatus::Draft,
        actual: TaskStatus::Publishing,
    });

    assert_eq!(blank.code(), "VALIDATION_FAILED");
    assert_eq!(missing.code(), "TASK_NOT_FOUND");
    assert_eq!(mismatch.code(), "INTERNAL_ERROR");
}

#[rstest]
fn account_and_content_errors_are_classified() {
    let missing = ApiError::from(AccountRegistryError::Repository(
        AccountRepositoryError::NotFound(AccountId::new()),
    ));
    let broken_store = ApiError::from(AccountRegistryError::Repository(
        AccountRepositoryError::persistence(std::io::Error::other("disk")),
    ));
    let blank_prompt = ApiError::from(ContentAssistError::Domain(ContentDomainError::EmptyPrompt));

    assert_eq!(missing.code(), "ACCOUNT_NOT_FOUND");
    assert_eq!(broken_store.code(), "INTERNAL_ERROR");
    assert_eq!(blank_prompt.code(), "VALIDATION_FAILED");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn response_body_carries_code_and_message() -> eyre::Result<()> {
    let response = ApiError::PublishConflict("task is busy".to_owned()).into_response();

    eyre::ensure!(response.status() == StatusCode::CONFLICT);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    eyre::ensure!(body.pointer("/error/code") == Some(&Value::from("PUBLISH_CONFLICT")));
    eyre::ensure!(body.pointer("/error/message") == Some(&Value::from("task is busy")));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn internal_details_are_not_leaked() -> eyre::Result<()> {
    let response = ApiError::Internal("connection string with password".to_owned()).into_response();

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    eyre::ensure!(body.pointer("/error/message") == Some(&Value::from("internal server error")));
    Ok(())
}
