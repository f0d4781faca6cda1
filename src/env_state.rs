//! # Exodash environment state
//!
//! This module defines the catalog configuration ([`CatalogConfig`]) and
//! [`ExodashEnv`], the **shared environment object** holding the HTTP client used to
//! talk to the NASA Exoplanet Archive.
//!
//! ## Overview
//!
//! 1. [`CatalogConfig`] describes *where* and *how* the catalog is queried: TAP endpoint,
//!    response format, row limit, request timeout and table. It is built through the fluent
//!    [`CatalogConfig::builder`] which validates every field.
//! 2. [`ExodashEnv`] owns a [`reqwest::Client`] configured from the catalog settings and
//!    provides the single HTTP primitive of the crate, a GET with query parameters.
//!
//! ## Structure
//!
//! ```text
//! ExodashEnv
//! ├── http_client  (reqwest::Client, timeout from the config)
//! └── config       (CatalogConfig)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use exodash::env_state::{CatalogConfig, ExodashEnv, ResponseFormat};
//!
//! let config = CatalogConfig::builder()
//!     .format(ResponseFormat::Csv)
//!     .max_rows(500)
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! let env = ExodashEnv::new(config).unwrap();
//! assert_eq!(env.config.max_rows, 500);
//! ```
//!
//! ## Notes
//!
//! - [`ExodashEnv`] is cheap to clone: the `reqwest` client shares its connection pool.
//! - The timeout bounds the whole request, so a stalled catalog ends in an error the caller
//!   can recover from (see [`crate::exodash::Exodash::load_planets`]).
use std::{fmt, str::FromStr, time::Duration};

use reqwest::{Client, Url};
use tracing::debug;

use crate::exodash_errors::ExodashError;

/// Synchronous TAP endpoint of the NASA Exoplanet Archive
pub const DEFAULT_TAP_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// Planetary Systems table
pub const DEFAULT_TABLE: &str = "ps";

/// Default cap on the number of rows returned by a query
pub const DEFAULT_MAX_ROWS: usize = 2000;

/// Default HTTP timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Serialization requested from the TAP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Csv,
}

impl ResponseFormat {
    /// Value of the TAP `format` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = ExodashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "csv" => Ok(ResponseFormat::Csv),
            _ => Err(ExodashError::UnknownResponseFormat(s.to_string())),
        }
    }
}

/// Settings of the remote catalog.
///
/// # Fields
///
/// * `base_url` - TAP synchronous query endpoint
/// * `format` - response serialization requested from the service
/// * `max_rows` - `maxrows` parameter sent with every query
/// * `timeout` - bound on a whole HTTP request
/// * `table` - catalog table queried
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub format: ResponseFormat,
    pub max_rows: usize,
    pub timeout: Duration,
    pub table: String,
}

impl CatalogConfig {
    /// Create a new [`CatalogConfigBuilder`] starting from the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use exodash::env_state::CatalogConfig;
    ///
    /// let config = CatalogConfig::builder()
    ///     .base_url("http://localhost:8080/TAP/sync")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.base_url.host_str(), Some("localhost"));
    ///
    /// assert!(CatalogConfig::builder().max_rows(0).build().is_err());
    /// ```
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            // constant URL, always parses
            base_url: Url::parse(DEFAULT_TAP_URL).unwrap_or_else(|_| unreachable!()),
            format: ResponseFormat::Json,
            max_rows: DEFAULT_MAX_ROWS,
            timeout: DEFAULT_TIMEOUT,
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

/// Fluent builder of [`CatalogConfig`].
///
/// Values are only checked by [`CatalogConfigBuilder::build`].
#[derive(Debug, Clone)]
pub struct CatalogConfigBuilder {
    base_url: String,
    format: ResponseFormat,
    max_rows: usize,
    timeout: Duration,
    table: String,
}

impl Default for CatalogConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogConfigBuilder {
    pub fn new() -> Self {
        CatalogConfigBuilder {
            base_url: DEFAULT_TAP_URL.to_string(),
            format: ResponseFormat::Json,
            max_rows: DEFAULT_MAX_ROWS,
            timeout: DEFAULT_TIMEOUT,
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn base_url(mut self, v: impl Into<String>) -> Self {
        self.base_url = v.into();
        self
    }
    pub fn format(mut self, v: ResponseFormat) -> Self {
        self.format = v;
        self
    }
    pub fn max_rows(mut self, v: usize) -> Self {
        self.max_rows = v;
        self
    }
    pub fn timeout(mut self, v: Duration) -> Self {
        self.timeout = v;
        self
    }
    pub fn table(mut self, v: impl Into<String>) -> Self {
        self.table = v.into();
        self
    }

    /// Validate the settings and produce the configuration.
    ///
    /// Return
    /// ------
    /// * `Err(ExodashError::InvalidUrl)` if the base URL does not parse or is not http(s)
    /// * `Err(ExodashError::InvalidCatalogConfig)` if `max_rows` is zero, the timeout is
    ///   zero, or the table name is not a plain identifier
    pub fn build(self) -> Result<CatalogConfig, ExodashError> {
        let base_url = Url::parse(self.base_url.trim())
            .map_err(|e| ExodashError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ExodashError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                self.base_url
            )));
        }

        if self.max_rows == 0 {
            return Err(ExodashError::InvalidCatalogConfig(
                "max_rows must be >= 1".into(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ExodashError::InvalidCatalogConfig(
                "timeout must be > 0".into(),
            ));
        }
        // the table name is interpolated in ADQL text
        if self.table.is_empty()
            || !self
                .table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err(ExodashError::InvalidCatalogConfig(format!(
                "invalid table name: {:?}",
                self.table
            )));
        }

        Ok(CatalogConfig {
            base_url,
            format: self.format,
            max_rows: self.max_rows,
            timeout: self.timeout,
            table: self.table,
        })
    }
}

/// Shared state passed to the catalog functions.
///
/// # Fields
///
/// * `http_client` - a `reqwest` client carrying the configured timeout
/// * `config` - the catalog settings the client was built from
#[derive(Debug, Clone)]
pub struct ExodashEnv {
    pub http_client: Client,
    pub config: CatalogConfig,
}

impl ExodashEnv {
    /// Build the HTTP client for a catalog configuration.
    ///
    /// Return
    /// ------
    /// * `Err(ExodashError::ReqwestError)` if the TLS backend cannot be initialized
    pub fn new(config: CatalogConfig) -> Result<Self, ExodashError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("exodash/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ExodashEnv {
            http_client,
            config,
        })
    }

    /// GET the configured endpoint with query parameters and return the body.
    ///
    /// A non-success HTTP status becomes [`ExodashError::CatalogStatus`] carrying the body.
    pub(crate) async fn get_from_url(
        &self,
        params: &[(&str, String)],
    ) -> Result<String, ExodashError> {
        debug!(url = %self.config.base_url, "catalog GET");

        let response = self
            .http_client
            .get(self.config.base_url.clone())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ExodashError::CatalogStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
