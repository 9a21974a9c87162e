//! HTTP fetcher implementation
//!
//! This module handles the single page request of an extraction:
//! - Building the HTTP client with a browser-like user agent and timeouts
//! - GET request with an HTML `Accept` header
//! - Error classification into upstream, network, and timeout failures

use crate::config::FetcherConfig;
use crate::{ExtractError, NetworkErrorKind, UpstreamCategory};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::error::Error as StdError;
use std::io::ErrorKind;
use std::time::Duration;
use url::Url;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after whatever redirects the client followed
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value, if any
    pub content_type: Option<String>,
    /// Page body decoded as text
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sitemap_extractor::config::FetcherConfig;
/// use sitemap_extractor::extractor::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text
///
/// # Error Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | Non-2xx status | `UpstreamHttp` with status, reason, category |
/// | Timeout (connect, headers, or body) | `Timeout` |
/// | DNS failure, refused, reset | `Network` with classified kind |
/// | Anything else | `Unexpected` |
///
/// No retries are attempted. A timed-out body is never parsed.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - Fetcher settings (Accept header, timeout for reporting)
/// * `url` - The validated page URL
pub async fn fetch_page(
    client: &Client,
    config: &FetcherConfig,
    url: &Url,
) -> Result<FetchedPage, ExtractError> {
    let response = client
        .get(url.clone())
        .header(ACCEPT, config.accept.as_str())
        .send()
        .await
        .map_err(|e| classify_request_error(url, config.timeout_secs, e))?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        tracing::warn!("Fetch of {} returned {} {}", url, status.as_u16(), reason);
        return Err(ExtractError::UpstreamHttp {
            status: status.as_u16(),
            reason,
            category: UpstreamCategory::from_status(status.as_u16()),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if let Some(ct) = &content_type {
        if !ct.contains("html") {
            tracing::debug!("{} has Content-Type '{}', parsing as HTML anyway", url, ct);
        }
    }

    let body = response
        .text()
        .await
        .map_err(|e| classify_request_error(url, config.timeout_secs, e))?;

    tracing::debug!("Fetched {} ({} bytes) from {}", url, body.len(), final_url);

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        content_type,
        body,
    })
}

/// Maps a transport error to the request-level taxonomy
fn classify_request_error(url: &Url, timeout_secs: u64, error: reqwest::Error) -> ExtractError {
    if error.is_timeout() {
        tracing::warn!("Fetch of {} timed out after {}s", url, timeout_secs);
        return ExtractError::Timeout {
            url: url.to_string(),
            timeout_secs,
        };
    }

    if error.is_connect() || error.is_body() || error.is_request() {
        let kind = network_error_kind(&error);
        tracing::warn!("Fetch of {} failed ({:?}): {}", url, kind, error);
        return ExtractError::Network {
            url: url.to_string(),
            kind,
            message: error.to_string(),
        };
    }

    tracing::warn!("Fetch of {} failed unexpectedly: {}", url, error);
    ExtractError::Unexpected(error.to_string())
}

/// Walks the error source chain looking for a recognizable cause
fn network_error_kind(error: &(dyn StdError + 'static)) -> NetworkErrorKind {
    let mut current = Some(error);

    while let Some(err) = current {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            match io.kind() {
                ErrorKind::ConnectionRefused => return NetworkErrorKind::ConnectionRefused,
                ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted => {
                    return NetworkErrorKind::ConnectionReset
                }
                _ => {}
            }
        }

        let message = err.to_string().to_lowercase();
        if message.contains("dns error") || message.contains("failed to lookup address") {
            return NetworkErrorKind::Dns;
        }

        current = err.source();
    }

    NetworkErrorKind::Other
}
