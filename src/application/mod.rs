pub mod kline_service;

pub use kline_service::*;
