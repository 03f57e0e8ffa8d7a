use crate::domain::market_data::Direction;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// Candlestick point in chart order: open, close, low, high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ohlc {
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
}

impl Ohlc {
    pub fn as_array(&self) -> [f64; 4] {
        [self.open, self.close, self.low, self.high]
    }
}

impl Serialize for Ohlc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_array().serialize(serializer)
    }
}

/// Volume bar: position on the category axis, height and colour sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeBar {
    pub index: usize,
    pub volume: f64,
    pub direction: Direction,
}

impl Serialize for VolumeBar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.index)?;
        tuple.serialize_element(&self.volume)?;
        tuple.serialize_element(&self.direction)?;
        tuple.end()
    }
}

/// The three index-aligned series handed to the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub category_data: Vec<String>,
    pub values: Vec<Ohlc>,
    pub volumes: Vec<VolumeBar>,
}

impl ChartData {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            category_data: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            volumes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.category_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.category_data.is_empty()
    }
}
