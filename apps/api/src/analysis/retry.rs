//! Bounded retry with exponential backoff for model calls.
//!
//! Only `LlmError::RateLimited` is retried. Everything else is returned on the
//! first occurrence. Waiting goes through the `Delay` trait so tests can observe
//! the backoff schedule without sleeping.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::LlmError;

const MAX_RETRIES: u32 = 3;
const BASE_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. Total attempts = `max_retries + 1`.
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay: Duration::from_millis(BASE_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (0-based): base, 2·base, 4·base, ...
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(retry))
    }
}

/// Something that can wait. Production uses the tokio timer.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Runs `op` until it succeeds, fails with a non-retryable error, or the
/// retry budget is spent. The last error is returned on exhaustion.
pub async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    delay: &dyn Delay,
    label: &str,
    mut op: F,
) -> Result<T, LlmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let mut retry = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_rate_limited() && retry < policy.max_retries => {
                let wait = policy.delay_for(retry);
                warn!(
                    "{label}: rate limited (attempt {}), retrying after {}ms",
                    retry + 1,
                    wait.as_millis()
                );
                delay.wait(wait).await;
                retry += 1;
            }
            Err(e) => {
                if e.is_rate_limited() {
                    warn!("{label}: still rate limited after {retry} retries, giving up");
                }
                return Err(e);
            }
        }
    }
}
