use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{MarketDataSource, MarketRecord};
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

/// Live-feed stand-in: `GET` a JSON array of market records.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> FetchResult<Vec<MarketRecord>> {
        get_logger().info(
            LogComponent::Infrastructure("HttpSource"),
            &format!("📈 Fetching kline records from: {}", self.url),
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{e:?}")))?;

        if !response.ok() {
            return Err(FetchError::Http { status: response.status() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read body: {e:?}")))?;
        let records: Vec<MarketRecord> = serde_json::from_str(&body)?;

        get_logger().info(
            LogComponent::Infrastructure("HttpSource"),
            &format!("✅ Loaded {} kline records", records.len()),
        );
        Ok(records)
    }
}

impl MarketDataSource for HttpSource {
    fn fetch(&self) -> LocalBoxFuture<'_, FetchResult<Vec<MarketRecord>>> {
        Box::pin(self.request())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
