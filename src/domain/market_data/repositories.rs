use crate::domain::errors::FetchResult;
use crate::domain::market_data::MarketRecord;
use futures::future::LocalBoxFuture;

/// Источник рыночных данных: one request, one complete response.
///
/// Sources run on the browser event loop, hence the non-`Send` future.
pub trait MarketDataSource {
    /// Fetch the whole record sequence, oldest bucket first.
    fn fetch(&self) -> LocalBoxFuture<'_, FetchResult<Vec<MarketRecord>>>;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;
}

impl<S: MarketDataSource + ?Sized> MarketDataSource for Box<S> {
    fn fetch(&self) -> LocalBoxFuture<'_, FetchResult<Vec<MarketRecord>>> {
        (**self).fetch()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
