use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::services::{
    BrowserTimeProvider, CONFIG_ELEMENT_ID, ConsoleLogger, config_or_default, read_config_from_document,
};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Install logging, read the page config and mount the app
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // The log level lives in the config, so the logger comes second.
    let read = read_config_from_document(CONFIG_ELEMENT_ID);
    let level = match &read {
        Ok(Some(parsed)) => parsed.log_level,
        _ => config::AppConfig::default().log_level,
    };
    domain::logging::init_logger(Box::new(ConsoleLogger::new(level)));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    let config = config_or_default(CONFIG_ELEMENT_ID, read);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Kline panel starting ({} feed)", config.feed.source),
    );

    mount_to_body(move || view! { <App config=config /> });
}
