pub mod breathing_circle;
pub mod button;
pub mod kline;
pub mod status_indicator;

pub use breathing_circle::*;
pub use button::*;
pub use kline::*;
pub use status_indicator::*;
