//! Sitemap Extractor: single-page same-origin link extraction
//!
//! This crate fetches exactly one HTML page, collects its anchor and
//! canonical/alternate link targets, keeps the ones that share the page's
//! origin, and returns them deduplicated and sorted as a flat sitemap.

pub mod config;
pub mod extractor;
pub mod output;
pub mod server;
pub mod url;

use thiserror::Error;

/// Top-level error type for the server entry point
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level failures of a single extraction
///
/// Per-link resolution failures never show up here; they are skipped
/// inside the collector.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid URL: {0}")]
    InvalidInput(#[from] UrlError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream returned {status} {reason}")]
    UpstreamHttp {
        status: u16,
        reason: String,
        category: UpstreamCategory,
    },

    #[error("Network error for {url}: {message}")]
    Network {
        url: String,
        kind: NetworkErrorKind,
        message: String,
    },

    #[error("Request timeout for {url} after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ExtractError {
    /// HTTP status the endpoint answers with for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::InvalidRequest(_) => 400,
            Self::UpstreamHttp { status, .. } => *status,
            Self::Network { .. } | Self::Timeout { .. } | Self::Unexpected(_) => 500,
        }
    }

    /// Message safe to hand back to an API caller
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidInput(e) => format!("Invalid URL: {}", e),
            Self::InvalidRequest(msg) => format!("Invalid request: {}", msg),
            Self::UpstreamHttp {
                status,
                reason,
                category,
            } => format!(
                "Failed to fetch URL: {} {} ({})",
                status,
                reason,
                category.describe()
            ),
            Self::Network { kind, .. } => kind.describe().to_string(),
            Self::Timeout { timeout_secs, .. } => format!(
                "The site did not respond within {} seconds (timeout)",
                timeout_secs
            ),
            Self::Unexpected(_) => "An unexpected error occurred while extracting links".to_string(),
        }
    }
}

/// Human-readable class of a non-2xx upstream status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCategory {
    NotFound,
    Forbidden,
    RateLimited,
    ServerError,
    ClientError,
    Other,
}

impl UpstreamCategory {
    /// Classifies an HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            404 | 410 => Self::NotFound,
            401 | 403 => Self::Forbidden,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            400..=499 => Self::ClientError,
            _ => Self::Other,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::NotFound => "page not found",
            Self::Forbidden => "access forbidden",
            Self::RateLimited => "rate limited by the site",
            Self::ServerError => "the site had a server error",
            Self::ClientError => "the site rejected the request",
            Self::Other => "unexpected response status",
        }
    }
}

/// Transport-level failure cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    Dns,
    ConnectionRefused,
    ConnectionReset,
    Other,
}

impl NetworkErrorKind {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Dns => "Could not resolve the site's domain name (DNS lookup failed)",
            Self::ConnectionRefused => "The site refused the connection",
            Self::ConnectionReset => "The connection to the site was reset",
            Self::Other => "Could not connect to the site",
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid address in config: {0}")]
    InvalidAddress(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for top-level operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for a single extraction
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use config::Config;
pub use extractor::{ExtractionResult, Extractor, LinkRecord};
pub use crate::url::{is_valid_url, validate_input_url, QueryPolicy};
