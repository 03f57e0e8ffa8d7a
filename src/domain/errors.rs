use derive_more::{Display, From};

/// Failure of a single market-data fetch attempt.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "request timed out after {} ms", after_ms)]
    Timeout { after_ms: u64 },
    #[display(fmt = "network error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP error: {}", status)]
    Http { status: u16 },
    /// Payload did not decode into market records (e.g. a required numeric field is missing)
    #[display(fmt = "malformed payload: {}", _0)]
    Malformed(String),
}

impl FetchError {
    /// Timeouts, transport failures and 5xx responses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Timeout { .. } | FetchError::Network(_) => true,
            FetchError::Http { status } => *status >= 500,
            FetchError::Malformed(_) => false,
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Malformed(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum ConfigError {
    #[display(fmt = "invalid config JSON: {}", _0)]
    InvalidJson(String),
    #[display(fmt = "invalid parameter `{}`: {}", name, reason)]
    InvalidParameter { name: &'static str, reason: String },
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum RenderingError {
    #[display(fmt = "chart container not mounted")]
    ContainerMissing,
    #[display(fmt = "option serialization failed: {}", _0)]
    Serialization(String),
    #[display(fmt = "chart library call failed: {}", _0)]
    Library(String),
}

impl std::error::Error for RenderingError {}

/// Root error type of the application
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Fetch Error: {}", _0)]
    Fetch(FetchError),
    #[display(fmt = "Config Error: {}", _0)]
    Config(ConfigError),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(RenderingError),
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Fetch(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Rendering(e) => Some(e),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_kinds() {
        assert!(FetchError::Timeout { after_ms: 10 }.is_retryable());
        assert!(FetchError::Network("reset".into()).is_retryable());
        assert!(FetchError::Http { status: 503 }.is_retryable());
        assert!(!FetchError::Http { status: 404 }.is_retryable());
        assert!(!FetchError::Malformed("eof".into()).is_retryable());
    }

    #[test]
    fn app_error_wraps_and_displays() {
        let err: AppError = FetchError::Http { status: 502 }.into();
        assert_eq!(err.to_string(), "Fetch Error: HTTP error: 502");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn json_errors_are_malformed() {
        let err: FetchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, FetchError::Malformed(_)));
    }
}
