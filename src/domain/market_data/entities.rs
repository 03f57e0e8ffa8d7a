use super::value_objects::Direction;
use serde::{Deserialize, Serialize};

/// Domain entity - one time bucket of a futures kline feed.
///
/// Only `data_ts` and the OHLCV fields feed the chart; the rest of the payload
/// is carried so the record round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    /// Bucket start, unix seconds
    pub data_ts: i64,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    #[serde(default)]
    pub hold: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<f64>,
    #[serde(default)]
    pub turnover: Option<f64>,
    #[serde(default)]
    pub settle: Option<f64>,
    #[serde(default)]
    pub pre_settle: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub amplitude: Option<f64>,
    #[serde(default)]
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_us: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_us: Option<String>,
}

impl MarketRecord {
    /// Record with only the fields the chart needs.
    pub fn new(data_ts: i64, open: f64, close: f64, high: f64, low: f64, volume: f64) -> Self {
        Self {
            data_ts,
            open,
            close,
            high,
            low,
            volume,
            hold: None,
            open_interest: None,
            turnover: None,
            settle: None,
            pre_settle: None,
            change: None,
            amplitude: None,
            product_id: String::new(),
            data_us: None,
            current_us: None,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::of(self.open, self.close)
    }
}
