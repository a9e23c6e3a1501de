//! Request and response bodies of the REST API.
//!
//! Field names are camelCase on the wire. Platform lists travel as the
//! comma-joined string accepted by [`PlatformSet::parse`].
//!
//! [`PlatformSet::parse`]: crate::platform::domain::PlatformSet::parse

use crate::account::domain::{AccountId, ConnectedAccount};
use crate::platform::domain::Platform;
use crate::task::domain::{
    AttemptOutcome, FailureKind, InvocationId, PublishAttempt, PublishStatus, PublishSummary,
    Task, TaskId, TaskStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
}

/// Body of `POST /accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectAccountBody {
    /// Platform identifier.
    pub platform: String,
    /// Display name on the platform.
    pub username: String,
    /// Platform-side account identifier.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A connected account as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    /// Account identifier.
    pub id: AccountId,
    /// Platform the account belongs to.
    pub platform: Platform,
    /// Display name on the platform.
    pub username: String,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Whether the stored credential can be used for publishing.
    pub publishable: bool,
    /// When the account was connected.
    pub created_at: DateTime<Utc>,
}

impl From<&ConnectedAccount> for AccountView {
    fn from(account: &ConnectedAccount) -> Self {
        Self {
            id: account.id(),
            platform: account.platform(),
            username: account.username().to_owned(),
            avatar: account.avatar().map(str::to_owned),
            publishable: account.credential().is_valid(),
            created_at: account.created_at(),
        }
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Post title.
    pub title: String,
    /// Post body.
    #[serde(default)]
    pub content: String,
    /// Media attached to the post.
    #[serde(default)]
    pub media_url: Option<String>,
    /// Comma-joined target platforms.
    pub platforms: String,
}

/// A task as listed by `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Post title.
    pub title: String,
    /// Comma-joined target platforms.
    pub platforms: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.content().title().to_owned(),
            platforms: task.platforms().to_string(),
            status: task.status(),
            created_at: task.created_at(),
        }
    }
}

/// A task with its content and attempt history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailView {
    /// Task identifier.
    pub id: TaskId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Media attached to the post.
    pub media_url: Option<String>,
    /// Comma-joined target platforms.
    pub platforms: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task last changed.
    pub updated_at: DateTime<Utc>,
    /// Most recent invocation, if any.
    pub last_invocation_id: Option<InvocationId>,
    /// Every attempt across all invocations, oldest first.
    pub attempts: Vec<AttemptView>,
}

impl From<&Task> for TaskDetailView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.content().title().to_owned(),
            content: task.content().body().to_owned(),
            media_url: task.content().media_url().map(str::to_owned),
            platforms: task.platforms().to_string(),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            last_invocation_id: task.last_invocation(),
            attempts: task.attempts().iter().map(AttemptView::from).collect(),
        }
    }
}

/// One recorded platform attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptView {
    /// Invocation the attempt belongs to.
    pub invocation_id: InvocationId,
    /// Targeted platform.
    pub platform: Platform,
    /// Whether the platform accepted the post.
    pub success: bool,
    /// Identifier assigned by the platform on success.
    pub external_post_id: Option<String>,
    /// Failure classification on failure.
    pub error_kind: Option<FailureKind>,
    /// Failure detail on failure.
    pub error: Option<String>,
    /// Adapter calls made.
    pub tries: u32,
    /// When dispatch started.
    pub started_at: DateTime<Utc>,
    /// When the platform settled.
    pub finished_at: DateTime<Utc>,
}

impl From<&PublishAttempt> for AttemptView {
    fn from(attempt: &PublishAttempt) -> Self {
        let (external_post_id, error_kind, error) = match attempt.outcome() {
            AttemptOutcome::Success { external_post_id } => {
                (Some(external_post_id.as_str().to_owned()), None, None)
            }
            AttemptOutcome::Failure { error_kind, detail } => {
                (None, Some(*error_kind), Some(detail.clone()))
            }
        };
        Self {
            invocation_id: attempt.invocation_id(),
            platform: attempt.platform(),
            success: attempt.is_success(),
            external_post_id,
            error_kind,
            error,
            tries: attempt.tries(),
            started_at: attempt.started_at(),
            finished_at: attempt.finished_at(),
        }
    }
}

/// Body of `POST /tasks/{id}/publish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    /// Aggregate status of the invocation.
    pub status: PublishStatus,
    /// Invocation that produced the results.
    pub invocation_id: InvocationId,
    /// One result per targeted platform, in canonical platform order.
    pub per_platform_results: Vec<AttemptView>,
}

impl From<&PublishSummary> for PublishResponse {
    fn from(summary: &PublishSummary) -> Self {
        Self {
            status: summary.status(),
            invocation_id: summary.invocation_id(),
            per_platform_results: summary.results().iter().map(AttemptView::from).collect(),
        }
    }
}

/// Body of `POST /ai/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    /// Free-form description of the post.
    pub prompt: String,
    /// Platform whose style to follow.
    #[serde(default)]
    pub platform: Option<String>,
}

/// Response of `POST /ai/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Drafted post body.
    pub content: String,
}
