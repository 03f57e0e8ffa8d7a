use super::entities::{ChartData, Ohlc, VolumeBar};
use crate::domain::market_data::MarketRecord;
use crate::time_utils::format_label_in;
use chrono::{Local, TimeZone};

/// Reshape records into the chart's category labels, candles and volume bars.
///
/// Output `i` of every series comes from record `i`. Nothing is sorted,
/// filtered or validated: NaN prices flow straight through. Labels use the
/// local timezone.
pub fn split_data(records: &[MarketRecord]) -> ChartData {
    split_data_in(records, &Local)
}

/// [`split_data`] with labels rendered in `tz`.
pub fn split_data_in<Tz: TimeZone>(records: &[MarketRecord], tz: &Tz) -> ChartData
where
    Tz::Offset: std::fmt::Display,
{
    let mut data = ChartData::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        data.category_data.push(format_label_in(record.data_ts, tz));
        data.values.push(Ohlc {
            open: record.open,
            close: record.close,
            low: record.low,
            high: record.high,
        });
        data.volumes.push(VolumeBar {
            index,
            volume: record.volume,
            direction: record.direction(),
        });
    }

    data
}
