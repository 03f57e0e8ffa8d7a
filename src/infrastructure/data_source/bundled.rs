use crate::domain::errors::FetchResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{MarketDataSource, MarketRecord};
use futures::future::LocalBoxFuture;
use gloo_timers::future::sleep;
use std::time::Duration;

/// Kline dataset shipped with the app.
pub const BUNDLED_KLINE: &str = include_str!("../../../data/kline.json");

/// Simulated feed: resolves once, after a fixed delay, with a static dataset.
#[derive(Debug, Clone)]
pub struct BundledSource {
    payload: &'static str,
    delay: Duration,
}

impl BundledSource {
    pub fn new(delay: Duration) -> Self {
        Self::with_payload(BUNDLED_KLINE, delay)
    }

    pub fn with_payload(payload: &'static str, delay: Duration) -> Self {
        Self { payload, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Decode the payload without waiting.
    pub fn decode(&self) -> FetchResult<Vec<MarketRecord>> {
        Ok(serde_json::from_str(self.payload)?)
    }
}

impl Default for BundledSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl MarketDataSource for BundledSource {
    fn fetch(&self) -> LocalBoxFuture<'_, FetchResult<Vec<MarketRecord>>> {
        Box::pin(async move {
            if !self.delay.is_zero() {
                sleep(self.delay).await;
            }
            let records = self.decode()?;
            get_logger().debug(
                LogComponent::Infrastructure("BundledSource"),
                &format!("📦 Served {} bundled records after {:?}", records.len(), self.delay),
            );
            Ok(records)
        })
    }

    fn name(&self) -> &'static str {
        "bundled"
    }
}
