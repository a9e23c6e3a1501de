//! Folding per-platform outcomes into one aggregate status.

use crate::task::domain::{AttemptOutcome, PublishStatus};

/// Computes the aggregate status of one invocation.
///
/// All successes give [`PublishStatus::Published`], all failures give
/// [`PublishStatus::Failed`], anything mixed gives
/// [`PublishStatus::PartialSuccess`]. Platforms that never received a
/// credential are recorded as failures and count as such. The result does not
/// depend on input order; `None` is returned only for an empty input.
///
/// # Examples
///
/// ```rust
/// use crosspost::publish::domain::aggregate;
/// use crosspost::task::domain::{AttemptOutcome, FailureKind, PublishStatus};
///
/// let outcomes = [
///     AttemptOutcome::failure(FailureKind::MissingCredential, "no account"),
///     AttemptOutcome::failure(FailureKind::Transient, "timeout"),
/// ];
/// assert_eq!(aggregate(&outcomes), Some(PublishStatus::Failed));
/// ```
#[must_use]
pub fn aggregate<'a>(
    outcomes: impl IntoIterator<Item = &'a AttemptOutcome>,
) -> Option<PublishStatus> {
    let mut any_success = false;
    let mut any_failure = false;
    for outcome in outcomes {
        if outcome.is_success() {
            any_success = true;
        } else {
            any_failure = true;
        }
    }

    match (any_success, any_failure) {
        (true, false) => Some(PublishStatus::Published),
        (false, true) => Some(PublishStatus::Failed),
        (true, true) => Some(PublishStatus::PartialSuccess),
        (false, false) => None,
    }
}
