//! Timeout, retry and concurrency limits applied to one invocation.

use std::num::NonZeroUsize;
use std::time::Duration;

const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(250);
const DEFAULT_MAX_RETRY_BACKOFF: Duration = Duration::from_secs(4);
const DEFAULT_MAX_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(value) => value,
    None => NonZeroUsize::MIN,
};

/// Dispatch limits shared by every platform of an invocation.
///
/// Only transient failures (including timeouts) consume the retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishPolicy {
    attempt_timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
    max_retry_backoff: Duration,
    max_concurrency: NonZeroUsize,
}

impl Default for PublishPolicy {
    fn default() -> Self {
        Self {
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
            max_retry_backoff: DEFAULT_MAX_RETRY_BACKOFF,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl PublishPolicy {
    /// Sets the timeout applied to each adapter call.
    #[must_use]
    pub const fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Sets how many extra tries a transient failure may trigger.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the initial backoff and its cap.
    #[must_use]
    pub const fn with_retry_backoff(mut self, initial: Duration, cap: Duration) -> Self {
        self.retry_backoff = initial;
        self.max_retry_backoff = cap;
        self
    }

    /// Sets how many platforms may be dispatched at once.
    #[must_use]
    pub const fn with_max_concurrency(mut self, max_concurrency: NonZeroUsize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Returns the per-call timeout.
    #[must_use]
    pub const fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Returns the retry budget.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the total number of adapter calls allowed per platform.
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Returns the concurrency limit.
    #[must_use]
    pub const fn max_concurrency(&self) -> NonZeroUsize {
        self.max_concurrency
    }

    /// Returns the delay before retry number `retry` (zero-based).
    ///
    /// The delay doubles with each retry and never exceeds the cap.
    #[must_use]
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 1_u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.retry_backoff
            .saturating_mul(factor)
            .min(self.max_retry_backoff)
    }
}
