//! Configuration and input validation for the admin API client.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{AdminClientError, Result};

/// Admin API base URL used when `CATALOG_ADMIN_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v2/admin";

/// HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Collection path of product association types, relative to the base URL.
pub const PRODUCT_ASSOCIATION_TYPES_RESOURCE: &str = "product-association-types";

/// Locale used to project a translated `name` onto listed items.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Resource code pattern: word characters and hyphens.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+$").expect("valid regex"));

/// Locale code pattern: `en` or `en_US`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LOCALE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(_[A-Z]{2})?$").expect("valid regex"));

/// Validate a resource code.
///
/// # Examples
/// ```
/// use catalog_admin_client::config::validate_code;
///
/// assert!(validate_code("similar_products").is_ok());
/// assert!(validate_code("up-sell").is_ok());
/// assert!(validate_code("not valid").is_err());
/// ```
pub fn validate_code(code: &str) -> Result<()> {
    if CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(AdminClientError::InvalidCode(code.to_string()))
    }
}

/// Validate a locale code such as `en_US`.
///
/// # Examples
/// ```
/// use catalog_admin_client::config::validate_locale_code;
///
/// assert!(validate_locale_code("en_US").is_ok());
/// assert!(validate_locale_code("fr").is_ok());
/// assert!(validate_locale_code("english").is_err());
/// ```
pub fn validate_locale_code(locale: &str) -> Result<()> {
    if LOCALE_PATTERN.is_match(locale) {
        Ok(())
    } else {
        Err(AdminClientError::InvalidLocale(locale.to_string()))
    }
}

/// Connection settings for the admin API.
///
/// NOTE: Do NOT derive `Debug` on this struct, `token` would be exposed.
#[derive(Clone)]
pub struct AdminApiConfig {
    pub api_base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for AdminApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApiConfig")
            .field("api_base_url", &self.api_base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AdminApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = std::env::var("CATALOG_ADMIN_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());

        let token = std::env::var("CATALOG_ADMIN_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        let timeout_secs = match std::env::var("CATALOG_ADMIN_TIMEOUT_SECS") {
            Ok(v) => v.parse().map_err(|_| {
                AdminClientError::Config(format!(
                    "CATALOG_ADMIN_TIMEOUT_SECS must be a whole number of seconds, got '{v}'"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::builder(api_base_url)
            .maybe_token(token)
            .timeout_secs(timeout_secs)
            .build())
    }

    /// Create a config builder, mainly for tests.
    pub fn builder(api_base_url: impl Into<String>) -> AdminApiConfigBuilder {
        AdminApiConfigBuilder {
            api_base_url: api_base_url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Builder for constructing `AdminApiConfig`.
pub struct AdminApiConfigBuilder {
    api_base_url: String,
    token: Option<String>,
    timeout_secs: u64,
}

impl AdminApiConfigBuilder {
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn maybe_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> AdminApiConfig {
        AdminApiConfig {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            token: self.token,
            timeout_secs: self.timeout_secs,
        }
    }
}
