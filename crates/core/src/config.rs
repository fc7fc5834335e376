//! Client configuration.
//!
//! # Example
//!
//! ```rust
//! use telegraph_core::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .base_url("http://127.0.0.1:8080")
//!     .timeout(5)
//!     .build();
//! assert_eq!(config.timeout, 5);
//! ```

/// Default endpoint of the Telegraph API.
pub const API_BASE_URL: &str = "https://api.telegra.ph";

/// HTTP settings for talking to the Telegraph API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API endpoint without a trailing method name (default: `https://api.telegra.ph`).
    pub base_url: String,

    /// Request timeout in seconds (default: 30).
    pub timeout: u64,

    /// User-Agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: 30,
            user_agent: format!("telegraph-core/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a new builder for ClientConfig.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

/// Builder for ClientConfig.
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ClientConfig::default() }
    }

    /// Sets the API endpoint.
    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.config.base_url = value.into();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout(mut self, value: u64) -> Self {
        self.config.timeout = value;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.user_agent = value.into();
        self
    }

    /// Builds the config.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
