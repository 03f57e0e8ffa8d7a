//! Chart rendering through ECharts.

pub mod echarts;
pub mod option;

pub use echarts::*;
pub use option::*;
