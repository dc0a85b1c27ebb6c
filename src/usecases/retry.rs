//! Fixed-delay retry around a fallible async step.
//!
//! The step reports a typed error; [`Retryable`] decides whether another
//! attempt is allowed. No backoff, no jitter.

use crate::domain::Retryable;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure.
    pub retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    /// Single attempt.
    pub const fn none() -> Self {
        Self {
            retries: 0,
            delay: Duration::ZERO,
        }
    }

    pub const fn fixed(retries: u32, delay: Duration) -> Self {
        Self { retries, delay }
    }

    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the policy is exhausted.
///
/// Returns the value together with the 1-based attempt that produced it.
pub async fn run_with_retry<T, E, F, Fut>(
    task: &str,
    policy: RetryPolicy,
    mut op: F,
) -> Result<(T, u32), E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + Display,
{
    let mut attempt = 1u32;
    loop {
        match op().await {
            Ok(value) => return Ok((value, attempt)),
            Err(e) if !e.is_retryable() || attempt >= policy.max_attempts() => {
                error!(task, attempt, reason = %e, "task failed");
                return Err(e);
            }
            Err(e) => {
                warn!(
                    task,
                    attempt,
                    max_attempts = policy.max_attempts(),
                    retry_in_secs = policy.delay.as_secs(),
                    reason = %e,
                    "task failed; retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}
