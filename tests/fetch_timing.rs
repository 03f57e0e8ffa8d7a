use futures::future::LocalBoxFuture;
use gloo_timers::future::sleep;
use kline_panel::domain::errors::{FetchError, FetchResult};
use kline_panel::domain::market_data::{MarketDataSource, MarketRecord};
use kline_panel::infrastructure::data_source::{BundledSource, FetchPolicy, HttpSource, fetch_with_policy, with_timeout};
use std::cell::Cell;
use std::time::Duration;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Answers slower than any sane timeout for the first `stalls` calls.
struct Stalling {
    stalls: Cell<u32>,
}

impl MarketDataSource for Stalling {
    fn fetch(&self) -> LocalBoxFuture<'_, FetchResult<Vec<MarketRecord>>> {
        let stall = self.stalls.get() > 0;
        if stall {
            self.stalls.set(self.stalls.get() - 1);
        }
        Box::pin(async move {
            if stall {
                sleep(Duration::from_millis(500)).await;
            }
            Ok(vec![MarketRecord::new(0, 1.0, 2.0, 2.0, 1.0, 3.0)])
        })
    }

    fn name(&self) -> &'static str {
        "stalling"
    }
}

/// Counts how often the wrapped source is asked.
struct Counting<S> {
    inner: S,
    calls: Cell<u32>,
}

impl<S: MarketDataSource> MarketDataSource for Counting<S> {
    fn fetch(&self) -> LocalBoxFuture<'_, FetchResult<Vec<MarketRecord>>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.fetch()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[wasm_bindgen_test(async)]
async fn bundled_source_waits_for_its_delay() {
    let source = BundledSource::new(Duration::from_millis(50));
    let start = js_sys::Date::now();
    let records = source.fetch().await.unwrap();
    assert!(js_sys::Date::now() - start >= 45.0);
    assert_eq!(records.len(), 120);
}

#[wasm_bindgen_test(async)]
async fn slow_fetch_times_out() {
    let result: FetchResult<()> = with_timeout(
        async {
            sleep(Duration::from_millis(200)).await;
            Ok(())
        },
        Some(Duration::from_millis(20)),
    )
    .await;
    assert_eq!(result, Err(FetchError::Timeout { after_ms: 20 }));
}

#[wasm_bindgen_test(async)]
async fn timeout_is_retried_with_backoff() {
    let source = Stalling { stalls: Cell::new(1) };
    let policy = FetchPolicy {
        timeout: Some(Duration::from_millis(30)),
        max_retries: 1,
        backoff: Duration::from_millis(10),
        max_backoff: Duration::from_millis(10),
    };
    let records = fetch_with_policy(&source, &policy).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(source.stalls.get(), 0);
}

#[wasm_bindgen_test(async)]
async fn exhausted_retries_report_timeout() {
    let source = Stalling { stalls: Cell::new(3) };
    let policy = FetchPolicy {
        timeout: Some(Duration::from_millis(20)),
        max_retries: 1,
        backoff: Duration::ZERO,
        max_backoff: Duration::ZERO,
    };
    let err = fetch_with_policy(&source, &policy).await.unwrap_err();
    assert_eq!(err, FetchError::Timeout { after_ms: 20 });
    assert_eq!(source.stalls.get(), 1);
}

#[wasm_bindgen_test(async)]
async fn missing_http_resource_is_a_404() {
    let source = HttpSource::new("/no-such-kline-feed.json");
    assert_eq!(source.fetch().await, Err(FetchError::Http { status: 404 }));
}

#[wasm_bindgen_test(async)]
async fn client_errors_are_not_retried() {
    let source = Counting { inner: HttpSource::new("/no-such-kline-feed.json"), calls: Cell::new(0) };
    let policy = FetchPolicy {
        timeout: Some(Duration::from_secs(5)),
        max_retries: 3,
        backoff: Duration::from_millis(10),
        max_backoff: Duration::from_millis(10),
    };
    let err = fetch_with_policy(&source, &policy).await.unwrap_err();
    assert_eq!(err, FetchError::Http { status: 404 });
    assert_eq!(source.calls.get(), 1);
}
