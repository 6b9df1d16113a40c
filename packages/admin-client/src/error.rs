//! Error types for the admin client.
//!
//! Uses the dual-error pattern: `AdminClientError` for library consumers
//! with detailed error context, and a crate-wide `Result` alias.

use thiserror::Error;

/// Main error type for the admin client library.
#[derive(Debug, Error)]
pub enum AdminClientError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid resource code.
    #[error("Invalid code: '{0}'. Expected letters, digits, '_' or '-' (e.g., similar_products)")]
    InvalidCode(String),

    /// Invalid locale code.
    #[error("Invalid locale code: '{0}'. Expected a language with optional region (e.g., en_US)")]
    InvalidLocale(String),

    /// Invalid `locale=name` pair given on the command line.
    #[error("Invalid translation '{0}'. Expected LOCALE=NAME (e.g., en_US=Accessories)")]
    InvalidTranslation(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL could not be combined with a resource path.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// Response body was not valid JSON.
    #[error("failed to parse response from {url} (status {status}): {message}")]
    ResponseParse {
        url: String,
        status: u16,
        message: String,
    },

    /// `create()` or `update()` was called before a request was built.
    #[error("no request has been built; call build_create_request or build_update_request first")]
    NoRequestBuilt,

    /// `last_response()` was called before any request was sent.
    #[error("no response has been received yet")]
    NoResponse,

    /// Response did not have the shape the checker expected.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Shared storage has no value for the key.
    #[error("there is no value stored under '{0}'")]
    MissingStorageKey(String),

    /// Admin API answered with a non-success status.
    #[error("admin API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A step assertion did not hold.
    #[error("{0}")]
    AssertionFailed(String),
}

/// Result type alias for admin client operations.
pub type Result<T> = std::result::Result<T, AdminClientError>;
