use crate::config::FeedConfig;
use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{MarketDataSource, MarketRecord};
use futures::future::{Either, select};
use gloo_timers::future::sleep;
use std::future::Future;
use std::time::Duration;

/// Request/response contract around a [`MarketDataSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Per-attempt deadline; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Extra attempts after the first one, for retryable errors only
    pub max_retries: u32,
    /// Delay before the first retry, doubled after each one
    pub backoff: Duration,
    pub max_backoff: Duration,
}

impl FetchPolicy {
    /// Single attempt, no deadline, no waiting.
    pub fn immediate() -> Self {
        Self { timeout: None, max_retries: 0, backoff: Duration::ZERO, max_backoff: Duration::ZERO }
    }

    /// Delay slept before retry number `retry` (1-based).
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.backoff.saturating_mul(factor).min(self.max_backoff)
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self::from(&FeedConfig::default())
    }
}

impl From<&FeedConfig> for FetchPolicy {
    fn from(feed: &FeedConfig) -> Self {
        Self {
            timeout: Some(Duration::from_millis(feed.timeout_ms)),
            max_retries: feed.max_retries,
            backoff: Duration::from_millis(feed.backoff_ms),
            max_backoff: Duration::from_millis(feed.max_backoff_ms),
        }
    }
}

/// Race `fut` against `timeout`.
pub async fn with_timeout<T, F>(fut: F, timeout: Option<Duration>) -> FetchResult<T>
where
    F: Future<Output = FetchResult<T>>,
{
    let Some(timeout) = timeout else {
        return fut.await;
    };
    match select(Box::pin(fut), Box::pin(sleep(timeout))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout { after_ms: timeout.as_millis() as u64 }),
    }
}

/// Fetch from `source`, retrying timeouts, network failures and 5xx answers.
pub async fn fetch_with_policy<S>(source: &S, policy: &FetchPolicy) -> FetchResult<Vec<MarketRecord>>
where
    S: MarketDataSource + ?Sized,
{
    let mut retry = 0u32;
    loop {
        match with_timeout(source.fetch(), policy.timeout).await {
            Ok(records) => {
                if retry > 0 {
                    get_logger().info(
                        LogComponent::Infrastructure("Fetch"),
                        &format!("✅ {} recovered after {} retries", source.name(), retry),
                    );
                }
                return Ok(records);
            }
            Err(e) if e.is_retryable() && retry < policy.max_retries => {
                retry += 1;
                let delay = policy.backoff_for(retry);
                get_logger().warn(
                    LogComponent::Infrastructure("Fetch"),
                    &format!(
                        "🔄 {} failed ({e}), retry {}/{} in {:?}",
                        source.name(),
                        retry,
                        policy.max_retries,
                        delay
                    ),
                );
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }
            Err(e) => {
                get_logger().error(
                    LogComponent::Infrastructure("Fetch"),
                    &format!("❌ {} failed: {e}", source.name()),
                );
                return Err(e);
            }
        }
    }
}
