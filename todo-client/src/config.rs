//! Client configuration

use crate::{ClientError, ClientResult};

/// Default API root of the todo backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:4567/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the todo backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (e.g., "http://localhost:4567/api"); the collection lives at
    /// `{base_url}/todos`
    pub base_url: String,

    /// Bearer token sent with every request
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `TODO_API_URL` (default [`DEFAULT_BASE_URL`])
    /// - `TODO_API_TOKEN` (optional, ignored when empty)
    /// - `TODO_TIMEOUT_SECS` (default [`DEFAULT_TIMEOUT_SECS`])
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(base_url);

        if let Ok(token) = std::env::var("TODO_API_TOKEN")
            && !token.is_empty()
        {
            config = config.with_token(token);
        }

        if let Ok(raw) = std::env::var("TODO_TIMEOUT_SECS") {
            let seconds = raw.parse::<u64>().map_err(|_| {
                ClientError::Config(format!("TODO_TIMEOUT_SECS must be a number, got '{raw}'"))
            })?;
            config = config.with_timeout(seconds);
        }

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a network todo service from this configuration
    pub fn build_service(&self) -> ClientResult<super::NetworkTodoService> {
        super::NetworkTodoService::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
