//! Scripted platform adapter replaying programmed responses.

use crate::account::domain::AccountCredential;
use crate::platform::{
    domain::{ExternalPostId, PublishContent},
    ports::{PlatformAdapter, PlatformError, PlatformResult},
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Adapter that answers from a queue of programmed responses.
///
/// Once the queue is drained every call returns the fallback response.
/// Clones share the same script and call counter.
#[derive(Debug, Clone)]
pub struct ScriptedPlatformAdapter {
    script: Arc<Mutex<Script>>,
    latency: Option<Duration>,
}

#[derive(Debug)]
struct Script {
    queued: VecDeque<PlatformResult<ExternalPostId>>,
    fallback: PlatformResult<ExternalPostId>,
    calls: usize,
}

impl ScriptedPlatformAdapter {
    /// Creates an adapter answering every call with `fallback`.
    #[must_use]
    pub fn new(fallback: PlatformResult<ExternalPostId>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                queued: VecDeque::new(),
                fallback,
                calls: 0,
            })),
            latency: None,
        }
    }

    /// Creates an adapter that always succeeds with `post_id`.
    #[must_use]
    pub fn succeeding(post_id: ExternalPostId) -> Self {
        Self::new(Ok(post_id))
    }

    /// Creates an adapter that always fails with `error`.
    #[must_use]
    pub fn failing(error: PlatformError) -> Self {
        Self::new(Err(error))
    }

    /// Queues responses returned before the fallback.
    #[must_use]
    pub fn with_responses(
        self,
        responses: impl IntoIterator<Item = PlatformResult<ExternalPostId>>,
    ) -> Self {
        {
            let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
            script.queued.extend(responses);
        }
        self
    }

    /// Delays every response by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Returns the number of publish calls received so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .calls
    }

    fn next_response(&self) -> PlatformResult<ExternalPostId> {
        let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        script.calls += 1;
        script
            .queued
            .pop_front()
            .unwrap_or_else(|| script.fallback.clone())
    }
}

#[async_trait]
impl PlatformAdapter for ScriptedPlatformAdapter {
    async fn publish(
        &self,
        _content: &PublishContent,
        _credential: &AccountCredential,
    ) -> PlatformResult<ExternalPostId> {
        let response = self.next_response();
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        response
    }
}
