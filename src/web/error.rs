//! API error responses.
//!
//! Every failure leaves the service as `{"error": {"code", "message"}}` with
//! a status code chosen from the error's meaning, not its origin.

use crate::account::{ports::AccountRepositoryError, services::AccountRegistryError};
use crate::content::services::ContentAssistError;
use crate::publish::services::PublishError;
use crate::task::{ports::TaskRepositoryError, services::TaskLifecycleError};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failure returned by an API handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The task does not exist for the acting user.
    TaskNotFound(String),
    /// The account does not exist for the acting user.
    AccountNotFound(String),
    /// A publish invocation is already running for the task.
    PublishConflict(String),
    /// The task targets no platform.
    EmptyPlatformSet(String),
    /// The request was malformed or failed validation.
    Validation(String),
    /// An infrastructure failure; details are logged, not returned.
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status for the error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::TaskNotFound(_) | Self::AccountNotFound(_) => StatusCode::NOT_FOUND,
            Self::PublishConflict(_) => StatusCode::CONFLICT,
            Self::EmptyPlatformSet(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TaskNotFound(_) => "TASK_NOT_FOUND",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::PublishConflict(_) => "PUBLISH_CONFLICT",
            Self::EmptyPlatformSet(_) => "EMPTY_PLATFORM_SET",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = match self {
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                "internal server error".to_owned()
            }
            Self::TaskNotFound(message)
            | Self::AccountNotFound(message)
            | Self::PublishConflict(message)
            | Self::EmptyPlatformSet(message)
            | Self::Validation(message) => message,
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(_) => Self::TaskNotFound(err.to_string()),
            TaskRepositoryError::Domain(_) => Self::Validation(err.to_string()),
            TaskRepositoryError::DuplicateTask(_)
            | TaskRepositoryError::StatusMismatch { .. }
            | TaskRepositoryError::Persistence(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(domain) => Self::Validation(domain.to_string()),
            TaskLifecycleError::Repository(repository) => repository.into(),
        }
    }
}

impl From<AccountRegistryError> for ApiError {
    fn from(err: AccountRegistryError) -> Self {
        match err {
            AccountRegistryError::Domain(_) | AccountRegistryError::Platform(_) => {
                Self::Validation(err.to_string())
            }
            AccountRegistryError::Repository(AccountRepositoryError::NotFound(_)) => {
                Self::AccountNotFound(err.to_string())
            }
            AccountRegistryError::Repository(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<PublishError> for ApiError {
    fn from(err: PublishError) -> Self {
        match err {
            PublishError::TaskNotFound(_) => Self::TaskNotFound(err.to_string()),
            PublishError::Conflict(_) => Self::PublishConflict(err.to_string()),
            PublishError::EmptyPlatformSet(_) => Self::EmptyPlatformSet(err.to_string()),
            PublishError::SummaryUnavailable(_)
            | PublishError::Repository(_)
            | PublishError::Dispatch { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<ContentAssistError> for ApiError {
    fn from(err: ContentAssistError) -> Self {
        match err {
            ContentAssistError::Domain(_) => Self::Validation(err.to_string()),
            ContentAssistError::Generator(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
