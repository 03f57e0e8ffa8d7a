use chrono::FixedOffset;
use kline_panel::domain::chart::split_data_in;
use kline_panel::domain::market_data::{Direction, RecordPolicy, RecordValidationService};
use kline_panel::infrastructure::data_source::BundledSource;
use std::time::Duration;

fn bundled() -> Vec<kline_panel::domain::market_data::MarketRecord> {
    BundledSource::new(Duration::ZERO).decode().unwrap()
}

#[test]
fn dataset_is_sorted_by_timestamp() {
    let records = bundled();
    assert_eq!(records.len(), 120);
    assert!(records.windows(2).all(|w| w[0].data_ts < w[1].data_ts));
    assert!(records.iter().all(|r| r.product_id == "rb2405"));
}

#[test]
fn adapter_covers_every_bundled_record() {
    let records = bundled();
    let shanghai = FixedOffset::east_opt(8 * 3600).unwrap();
    let data = split_data_in(&records, &shanghai);

    assert_eq!(data.len(), records.len());
    assert_eq!(data.category_data.first().map(String::as_str), Some("2024-03-01 09:00:00"));
    assert_eq!(data.category_data.last().map(String::as_str), Some("2024-03-01 10:59:00"));

    let up = data.volumes.iter().filter(|bar| bar.direction == Direction::Up).count();
    let flat = records.iter().filter(|r| r.close == r.open).count();
    assert_eq!(up, 52);
    assert_eq!(flat, 29);
}

#[test]
fn dataset_passes_record_checks() {
    let sanitized = RecordValidationService::sanitize(bundled(), RecordPolicy::Drop);
    assert!(sanitized.issues.is_empty());
    assert_eq!(sanitized.records.len(), 120);
}
