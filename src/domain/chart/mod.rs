//! Chart aggregate: the series shapes the kline view consumes and the adapter
//! that produces them.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
