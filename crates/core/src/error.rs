//! Error types for Telegraph operations.
//!
//! This module defines the main error type [`TelegraphError`] which represents
//! all possible errors that can occur while converting HTML to content nodes,
//! encoding request parameters, and calling the Telegraph API.
//!
//! # Example
//!
//! ```rust
//! use telegraph_core::{TelegraphError, Result};
//!
//! fn require_token(token: Option<&str>) -> Result<&str> {
//!     token.ok_or(TelegraphError::MissingAccessToken)
//! }
//! ```

use thiserror::Error;

/// Main error type for Telegraph operations.
///
/// # Example
///
/// ```rust
/// use telegraph_core::{TelegraphError, nodes_from_html_bytes};
///
/// match nodes_from_html_bytes(&[0x66, 0xff, 0x6f]) {
///     Ok(nodes) => println!("{} nodes", nodes.len()),
///     Err(TelegraphError::HtmlParseError(reason)) => println!("unreadable input: {}", reason),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum TelegraphError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport problems.
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an API call exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when the API base URL or a page path does not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when the input stream cannot be parsed at all. HTML5 parsing
    /// accepts any markup, so in practice this means undecodable bytes.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The service answered with `ok: false`.
    #[error("API error from {method}: {message}")]
    Api { method: String, message: String },

    /// The service answered with something that is not a response envelope.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// A request parameter could not be encoded as JSON.
    #[error("Failed to encode parameter: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The call requires an access token and the client has none.
    #[error("No access token available; create or load an account first")]
    MissingAccessToken,

    /// File I/O errors (credential storage).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors.
    ///
    /// Returned when a configuration directory cannot be determined or
    /// stored credentials are unusable.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for TelegraphError.
///
/// This is a convenience alias for `std::result::Result<T, TelegraphError>`.
pub type Result<T> = std::result::Result<T, TelegraphError>;
