//! Typed model of the ECharts option object used by the kline view.
//!
//! Field names follow the ECharts API (camelCase). JS callbacks such as the
//! axis label formatter cannot go through serde; [`super::echarts`] attaches
//! them after serialization.

use crate::domain::chart::{ChartData, ChartTheme, Ohlc, VolumeBar};
use crate::domain::market_data::Direction;
use serde::Serialize;

/// Index of the candlestick grid / axes
pub const MAIN_AXIS: u8 = 0;
/// Index of the volume grid / axes
pub const VOLUME_AXIS: u8 = 1;
/// Candlestick series name
pub const CANDLE_SERIES_NAME: &str = "K";
/// Volume series name ("open interest" in the desktop build's wording)
pub const VOLUME_SERIES_NAME: &str = "持仓量";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchartsOption {
    pub animation: bool,
    pub tooltip: Tooltip,
    pub visual_map: VisualMap,
    pub axis_pointer: AxisPointer,
    pub grid: Vec<Grid>,
    pub x_axis: Vec<XAxis>,
    pub y_axis: Vec<YAxis>,
    pub data_zoom: Vec<DataZoom>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: &'static str,
    pub axis_pointer: PointerKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointerKind {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMap {
    pub show: bool,
    pub series_index: u8,
    /// Volume bar dimension holding the direction sign
    pub dimension: u8,
    pub pieces: Vec<Piece>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Piece {
    pub value: Direction,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisPointer {
    pub link: Vec<AxisLink>,
    pub label: PointerLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLink {
    pub x_axis_index: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub top: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub height: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisPointerOverride {
    pub label: PointerLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub grid_index: u8,
    pub data: Vec<String>,
    pub boundary_gap: bool,
    pub axis_line: AxisLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLine>,
    pub min: &'static str,
    pub max: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<Toggle>,
    pub axis_label: AxisLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointerOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub scale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_index: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<AxisLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<Toggle>,
    pub split_line: SplitLine,
    pub axis_label: AxisLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoom {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<&'static str>,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    #[serde(rename_all = "camelCase")]
    Candlestick {
        name: &'static str,
        data: Vec<Ohlc>,
        x_axis_index: u8,
        y_axis_index: u8,
    },
    #[serde(rename_all = "camelCase")]
    Bar {
        name: &'static str,
        data: Vec<VolumeBar>,
        x_axis_index: u8,
        y_axis_index: u8,
    },
}

impl EchartsOption {
    /// Candlestick grid on top, direction-coloured volume bars below.
    pub fn kline(data: &ChartData, theme: &ChartTheme) -> Self {
        let axis_line = || AxisLine {
            show: None,
            on_zero: Some(false),
            line_style: Some(LineStyle { color: theme.axis_line_color.clone() }),
        };
        let hidden = || Toggle { show: false };

        Self {
            animation: false,
            tooltip: Tooltip { trigger: "axis", axis_pointer: PointerKind { kind: "cross" } },
            visual_map: VisualMap {
                show: false,
                series_index: VOLUME_AXIS,
                dimension: 2,
                pieces: vec![
                    Piece { value: Direction::Up, color: theme.up_color.clone() },
                    Piece { value: Direction::Down, color: theme.down_color.clone() },
                ],
            },
            axis_pointer: AxisPointer {
                link: vec![AxisLink { x_axis_index: "all" }],
                label: PointerLabel { show: None, background_color: Some(theme.pointer_label_color.clone()) },
            },
            grid: vec![
                Grid { top: "0%", left: ".6%", right: "5%", height: "75%" },
                Grid { top: "75.5%", left: ".6%", right: "5%", height: "16%" },
            ],
            x_axis: vec![
                XAxis {
                    kind: "category",
                    grid_index: MAIN_AXIS,
                    data: data.category_data.clone(),
                    boundary_gap: true,
                    axis_line: axis_line(),
                    split_line: None,
                    min: "dataMin",
                    max: "dataMax",
                    axis_tick: Some(hidden()),
                    axis_label: AxisLabel { show: false, font_size: None },
                    axis_pointer: Some(AxisPointerOverride {
                        label: PointerLabel { show: Some(false), background_color: None },
                    }),
                },
                XAxis {
                    kind: "category",
                    grid_index: VOLUME_AXIS,
                    data: data.category_data.clone(),
                    boundary_gap: true,
                    axis_line: axis_line(),
                    split_line: Some(SplitLine { show: false, line_style: None }),
                    min: "dataMin",
                    max: "dataMax",
                    axis_tick: None,
                    axis_label: AxisLabel { show: true, font_size: Some(12) },
                    axis_pointer: None,
                },
            ],
            y_axis: vec![
                YAxis {
                    scale: true,
                    grid_index: None,
                    split_number: None,
                    position: Some("right"),
                    axis_line: None,
                    axis_tick: None,
                    split_line: SplitLine {
                        show: true,
                        line_style: Some(LineStyle { color: theme.axis_line_color.clone() }),
                    },
                    axis_label: AxisLabel { show: true, font_size: Some(12) },
                },
                YAxis {
                    scale: true,
                    grid_index: Some(VOLUME_AXIS),
                    split_number: Some(2),
                    position: None,
                    axis_line: Some(AxisLine { show: Some(false), on_zero: None, line_style: None }),
                    axis_tick: Some(hidden()),
                    split_line: SplitLine { show: false, line_style: None },
                    axis_label: AxisLabel { show: false, font_size: None },
                },
            ],
            data_zoom: vec![
                DataZoom {
                    kind: "inside",
                    x_axis_index: Some(vec![MAIN_AXIS, VOLUME_AXIS]),
                    y_axis_index: None,
                    orient: None,
                    start: theme.zoom_start,
                    end: theme.zoom_end,
                },
                DataZoom {
                    kind: "inside",
                    x_axis_index: None,
                    y_axis_index: Some(vec![MAIN_AXIS]),
                    orient: Some("vertical"),
                    start: theme.zoom_start,
                    end: theme.zoom_end,
                },
            ],
            series: vec![
                Series::Candlestick {
                    name: CANDLE_SERIES_NAME,
                    data: data.values.clone(),
                    x_axis_index: MAIN_AXIS,
                    y_axis_index: MAIN_AXIS,
                },
                Series::Bar {
                    name: VOLUME_SERIES_NAME,
                    data: data.volumes.clone(),
                    x_axis_index: VOLUME_AXIS,
                    y_axis_index: VOLUME_AXIS,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::split_data_in;
    use crate::domain::market_data::MarketRecord;
    use chrono::Utc;
    use serde_json::json;

    fn sample() -> ChartData {
        split_data_in(
            &[
                MarketRecord::new(1_700_000_000, 10.0, 12.0, 13.0, 9.0, 100.0),
                MarketRecord::new(1_700_000_060, 12.0, 11.0, 12.5, 10.5, 40.0),
            ],
            &Utc,
        )
    }

    #[test]
    fn both_x_axes_share_categories() {
        let option = EchartsOption::kline(&sample(), &ChartTheme::default());
        let value = serde_json::to_value(&option).unwrap();
        assert_eq!(value["xAxis"][0]["data"], value["xAxis"][1]["data"]);
        assert_eq!(value["xAxis"][1]["data"][1], "2023-11-14 22:14:20");
        assert_eq!(value["xAxis"][0]["axisPointer"]["label"]["show"], false);
        assert_eq!(value["xAxis"][1]["gridIndex"], 1);
    }

    #[test]
    fn series_carry_adapter_output() {
        let option = EchartsOption::kline(&sample(), &ChartTheme::default());
        let value = serde_json::to_value(&option).unwrap();
        assert_eq!(
            value["series"][0],
            json!({
                "type": "candlestick",
                "name": "K",
                "data": [[10.0, 12.0, 9.0, 13.0], [12.0, 11.0, 10.5, 12.5]],
                "xAxisIndex": 0,
                "yAxisIndex": 0
            })
        );
        assert_eq!(value["series"][1]["type"], "bar");
        assert_eq!(value["series"][1]["data"], json!([[0, 100.0, 1], [1, 40.0, -1]]));
    }

    #[test]
    fn zoom_window_follows_theme() {
        let theme = ChartTheme { zoom_start: 20.0, ..ChartTheme::default() };
        let value = serde_json::to_value(EchartsOption::kline(&ChartData::default(), &theme)).unwrap();
        assert_eq!(value["dataZoom"][0]["xAxisIndex"], json!([0, 1]));
        assert_eq!(value["dataZoom"][1]["orient"], "vertical");
        assert_eq!(value["dataZoom"][1]["start"], 20.0);
        assert!(value["dataZoom"][0].get("yAxisIndex").is_none());
    }

    #[test]
    fn visual_map_colours_by_direction() {
        let option = EchartsOption::kline(&ChartData::default(), &ChartTheme::default());
        insta::assert_json_snapshot!(option.visual_map, @r###"
        {
          "show": false,
          "seriesIndex": 1,
          "dimension": 2,
          "pieces": [
            {
              "value": 1,
              "color": "#296758"
            },
            {
              "value": -1,
              "color": "#762c38"
            }
          ]
        }
        "###);
    }
}
