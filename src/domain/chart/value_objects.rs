use crate::domain::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Value Object - colours and initial zoom window of the kline chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    /// Volume bar colour when the bucket closed above its open
    pub up_color: String,
    pub down_color: String,
    pub axis_line_color: String,
    pub pointer_label_color: String,
    /// Initial visible window, percent of the data range
    pub zoom_start: f64,
    pub zoom_end: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            up_color: "#296758".to_string(),
            down_color: "#762c38".to_string(),
            axis_line_color: "#404552".to_string(),
            pointer_label_color: "#777".to_string(),
            zoom_start: 50.0,
            zoom_end: 100.0,
        }
    }
}

impl ChartTheme {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, color) in [
            ("chart.up_color", &self.up_color),
            ("chart.down_color", &self.down_color),
            ("chart.axis_line_color", &self.axis_line_color),
            ("chart.pointer_label_color", &self.pointer_label_color),
        ] {
            if !is_hex_color(color) {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: format!("`{color}` is not a #rgb/#rrggbb colour"),
                });
            }
        }

        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.zoom_start) || !in_range(self.zoom_end) || self.zoom_start >= self.zoom_end {
            return Err(ConfigError::InvalidParameter {
                name: "chart.zoom_start",
                reason: format!(
                    "zoom window {}..{} must satisfy 0 <= start < end <= 100",
                    self.zoom_start, self.zoom_end
                ),
            });
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
