use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::wikipedia::WikiError;

/// How often and how patiently to retry a failed source call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 2,
            base_delay_ms: 500,
        }
    }
}

/// Calculate exponential backoff delay with jitter
pub fn calculate_backoff_delay(attempt: u32, base_delay_ms: u64) -> Duration {
    // Cap the exponent so the delay stays within minutes
    let capped_attempt = attempt.min(8);

    let base_delay = base_delay_ms.saturating_mul(2_u64.saturating_pow(capped_attempt));

    // Add jitter: ±30% randomness
    let jitter_factor = rand::thread_rng().gen_range(0.7..1.3);
    let delay_with_jitter = (base_delay as f64 * jitter_factor).round() as u64;

    Duration::from_millis(delay_with_jitter)
}

/// Run `op`, retrying transient failures up to `policy.attempts` more times.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, what: &str, mut op: F) -> Result<T, WikiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, WikiError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.should_retry() && attempt < policy.attempts => {
                let delay = calculate_backoff_delay(attempt, policy.base_delay_ms);
                warn!(
                    "{} failed (attempt {}): {}; retrying in {:?}",
                    what,
                    attempt + 1,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
