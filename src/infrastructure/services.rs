//! Browser-backed implementations of the domain service traits.

use crate::config::AppConfig;
use crate::domain::errors::ConfigError;
use crate::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, TimeProvider, get_logger};

/// Console logger implementation for WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted: wasm_bindgen::JsValue = entry.render().into();
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// Wall clock from `Date.now()`, formatted in local time.
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// Id of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "kline-config";

/// Config embedded in the host page, if any. Does not log: this runs before
/// the logger exists, since the log level comes from the config itself.
pub fn read_config_from_document(element_id: &str) -> Result<Option<AppConfig>, ConfigError> {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
        .and_then(|element| element.text_content());

    text.map(|json| AppConfig::from_json(&json)).transpose()
}

/// Settle the outcome of [`read_config_from_document`], falling back to defaults.
pub fn config_or_default(element_id: &str, read: Result<Option<AppConfig>, ConfigError>) -> AppConfig {
    match read {
        Ok(Some(config)) => {
            get_logger().info(
                LogComponent::Infrastructure("Config"),
                &format!("⚙️ Loaded config from #{element_id} (source: {})", config.feed.source),
            );
            config
        }
        Ok(None) => {
            get_logger().debug(
                LogComponent::Infrastructure("Config"),
                &format!("No #{element_id} element, using default config"),
            );
            AppConfig::default()
        }
        Err(e) => {
            get_logger().warn(
                LogComponent::Infrastructure("Config"),
                &format!("⚠️ Ignoring #{element_id}: {e}"),
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceKind;

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let read = AppConfig::from_json(r#"{"feed": {"source": "http"}}"#).map(Some);
        assert!(read.is_err());
        assert_eq!(config_or_default(CONFIG_ELEMENT_ID, read), AppConfig::default());
    }

    #[test]
    fn missing_element_uses_defaults() {
        assert_eq!(config_or_default(CONFIG_ELEMENT_ID, Ok(None)), AppConfig::default());
    }

    #[test]
    fn valid_config_is_kept() {
        let read = AppConfig::from_json(r#"{"feed": {"source": "http", "url": "/kline"}}"#).map(Some);
        assert_eq!(config_or_default(CONFIG_ELEMENT_ID, read).feed.source, SourceKind::Http);
    }

    #[test]
    fn console_logger_presets() {
        assert_eq!(ConsoleLogger::new_production().min_level(), LogLevel::Info);
        assert_eq!(ConsoleLogger::new_development().min_level(), LogLevel::Debug);
    }
}
