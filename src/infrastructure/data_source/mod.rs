//! Market data sources and the timeout/retry driver around them.

pub mod bundled;
pub mod http;
pub mod retry;

pub use bundled::*;
pub use http::*;
pub use retry::*;

use crate::config::{FeedConfig, SourceKind};
use crate::domain::market_data::MarketDataSource;

/// Build the source selected in the feed config.
///
/// `AppConfig::validate` guarantees a URL for the HTTP source; an empty one
/// here falls back to the bundled dataset.
pub fn source_from_config(feed: &FeedConfig) -> Box<dyn MarketDataSource> {
    match (feed.source, feed.url.as_deref()) {
        (SourceKind::Http, Some(url)) if !url.is_empty() => Box::new(HttpSource::new(url)),
        _ => Box::new(BundledSource::new(feed.simulated_delay())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_source_by_kind() {
        assert_eq!(source_from_config(&FeedConfig::default()).name(), "bundled");

        let feed = FeedConfig {
            source: SourceKind::Http,
            url: Some("/api/kline".into()),
            ..FeedConfig::default()
        };
        assert_eq!(source_from_config(&feed).name(), "http");

        let feed = FeedConfig { source: SourceKind::Http, url: None, ..FeedConfig::default() };
        assert_eq!(source_from_config(&feed).name(), "bundled");
    }
}
