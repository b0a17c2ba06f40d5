//! Exponential-backoff retry for fallible async operations.
//!
//! Used by the MongoDB connector to survive a database that comes up
//! after the service does.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for retried operations.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,
    /// Ceiling on the delay between retries, in milliseconds
    pub max_delay_ms: u64,
    /// Growth factor applied to the delay after each failure
    pub backoff_multiplier: f64,
    /// Randomize each delay to avoid synchronized reconnect storms
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

impl RetryConfig {
    /// Defaults: 3 retries, 100ms initial delay, 5s cap, 2x growth, jitter on
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The final error is returned unchanged once `max_retries` is exceeded.
///
/// # Example
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let policy = RetryConfig::new().with_max_retries(5);
/// let client = retry_with_backoff(|| database::mongodb::connect(&url), policy).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut failures = 0;
    let mut base_delay = config.initial_delay_ms;

    loop {
        let err = match operation().await {
            Ok(value) => {
                if failures > 0 {
                    debug!(retries = failures, "operation recovered");
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        failures += 1;
        if failures > config.max_retries {
            warn!(attempts = failures, "giving up: {}", err);
            return Err(err);
        }

        let sleep_ms = if config.use_jitter {
            jittered(base_delay)
        } else {
            base_delay
        };

        debug!(
            attempt = failures,
            max = config.max_retries,
            delay_ms = sleep_ms,
            "operation failed, retrying: {}",
            err
        );

        tokio::time::sleep(Duration::from_millis(sleep_ms)).await;

        base_delay =
            ((base_delay as f64 * config.backoff_multiplier) as u64).min(config.max_delay_ms);
    }
}

/// Retry with the default policy.
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

/// Scale a delay by a pseudo-random factor in [0.5, 1.0).
///
/// RandomState is enough entropy here; pulling in a rng crate for one
/// jitter value is not worth it.
fn jittered(delay_ms: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let seed = RandomState::new().hash_one(std::time::SystemTime::now());
    let factor = (seed % 50) as f64 / 100.0 + 0.5;

    (delay_ms as f64 * factor) as u64
}
