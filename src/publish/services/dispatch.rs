//! Delivery of one task to one platform within an invocation.

use crate::account::{
    domain::{AccountCredential, UserId},
    ports::CredentialStore,
};
use crate::platform::{
    domain::{Platform, PublishContent},
    ports::{PlatformAdapter, PlatformError},
};
use crate::publish::domain::PublishPolicy;
use crate::task::domain::{AttemptOutcome, FailureKind, InvocationId, PublishAttempt};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Terminal result of delivering to one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Delivery {
    pub(super) tries: u32,
    pub(super) outcome: AttemptOutcome,
}

impl Delivery {
    fn without_contact(error_kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            tries: 0,
            outcome: AttemptOutcome::failure(error_kind, detail),
        }
    }
}

/// Independent unit of work for one platform.
///
/// Owns everything it needs so it can run on its own tokio task; units of the
/// same invocation share nothing but the concurrency semaphore.
pub(super) struct PlatformUnit<S, C>
where
    S: CredentialStore + ?Sized,
    C: Clock + Send + Sync,
{
    pub(super) platform: Platform,
    pub(super) invocation_id: InvocationId,
    pub(super) owner: UserId,
    pub(super) content: Arc<PublishContent>,
    pub(super) credentials: Arc<S>,
    pub(super) adapter: Option<Arc<dyn PlatformAdapter>>,
    pub(super) policy: PublishPolicy,
    pub(super) clock: Arc<C>,
    pub(super) semaphore: Arc<Semaphore>,
}

impl<S, C> PlatformUnit<S, C>
where
    S: CredentialStore + ?Sized,
    C: Clock + Send + Sync,
{
    /// Runs the unit to a terminal attempt record.
    pub(super) async fn run(self) -> PublishAttempt {
        // A closed semaphore only means no limit is enforced any more.
        let _permit = Arc::clone(&self.semaphore).acquire_owned().await.ok();
        let started_at = self.clock.utc();
        let delivery = self.deliver().await;
        debug!(
            platform = %self.platform,
            tries = delivery.tries,
            success = delivery.outcome.is_success(),
            "platform reached terminal outcome"
        );
        PublishAttempt::new(
            self.invocation_id,
            self.platform,
            started_at,
            self.clock.utc(),
            delivery.tries,
            delivery.outcome,
        )
    }

    async fn deliver(&self) -> Delivery {
        let credential = match self.credentials.resolve(&self.owner, self.platform).await {
            Ok(Some(credential)) if credential.is_valid() => credential,
            Ok(Some(_)) => {
                return Delivery::without_contact(
                    FailureKind::MissingCredential,
                    format!("stored {} credential is not valid", self.platform.label()),
                );
            }
            Ok(None) => {
                return Delivery::without_contact(
                    FailureKind::MissingCredential,
                    format!("no {} account connected", self.platform.label()),
                );
            }
            Err(err) => return Delivery::without_contact(FailureKind::Unknown, err.to_string()),
        };

        let Some(adapter) = &self.adapter else {
            return Delivery::without_contact(
                FailureKind::Unknown,
                format!("no adapter registered for {}", self.platform.label()),
            );
        };

        publish_with_retry(
            adapter.as_ref(),
            &self.content,
            &credential,
            &self.policy,
            self.platform,
        )
        .await
    }
}

/// Calls the adapter until it succeeds, fails terminally, or the retry budget
/// runs out.
///
/// Timeouts are treated as transient failures.
pub(super) async fn publish_with_retry(
    adapter: &dyn PlatformAdapter,
    content: &PublishContent,
    credential: &AccountCredential,
    policy: &PublishPolicy,
    platform: Platform,
) -> Delivery {
    let mut tries: u32 = 0;
    loop {
        tries = tries.saturating_add(1);
        let call = adapter.publish(content, credential);
        let error = match tokio::time::timeout(policy.attempt_timeout(), call).await {
            Ok(Ok(external_post_id)) => {
                return Delivery {
                    tries,
                    outcome: AttemptOutcome::Success { external_post_id },
                };
            }
            Ok(Err(err)) => err,
            Err(_) => PlatformError::transient(format!(
                "no response within {} ms",
                policy.attempt_timeout().as_millis()
            )),
        };

        if !error.kind().is_retryable() || tries >= policy.max_tries() {
            return Delivery {
                tries,
                outcome: AttemptOutcome::failure(error.kind().into(), error.message()),
            };
        }

        let delay = policy.backoff_for(tries.saturating_sub(1));
        warn!(
            platform = %platform,
            tries,
            error = %error,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "retrying after transient failure"
        );
        tokio::time::sleep(delay).await;
    }
}
