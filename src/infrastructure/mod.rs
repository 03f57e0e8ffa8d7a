pub mod data_source;
pub mod rendering;
pub mod services;
