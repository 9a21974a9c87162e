//! Extraction pipeline
//!
//! Ties validation, fetching, and collection together for one request.
//! An `Extractor` holds only immutable settings and the HTTP client's
//! connection pool, so concurrent requests never see each other's state.

use crate::config::{Config, FetcherConfig};
use crate::extractor::fetcher::{build_http_client, fetch_page};
use crate::extractor::parser::{collect_links, LinkRecord};
use crate::url::{origin_string, validate_input_url, QueryPolicy};
use crate::ExtractResult;
use reqwest::Client;
use std::time::Instant;

/// Outcome of one successful extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Origin (`scheme://host[:port]`) of the requested page
    pub base_url: String,

    /// Same-origin links, unique and sorted by URL
    pub links: Vec<LinkRecord>,

    /// Always `links.len()`
    pub total_links: usize,

    /// Duration of fetch, parse, and collection
    pub elapsed_ms: u64,
}

impl ExtractionResult {
    pub fn new(base_url: String, links: Vec<LinkRecord>, elapsed_ms: u64) -> Self {
        let total_links = links.len();
        Self {
            base_url,
            links,
            total_links,
            elapsed_ms,
        }
    }

    /// Iterates the sitemap URLs in order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.url.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Runs extractions with a shared client and fixed settings
#[derive(Debug, Clone)]
pub struct Extractor {
    client: Client,
    fetcher: FetcherConfig,
    query_policy: QueryPolicy,
}

impl Extractor {
    /// Creates an extractor from the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Extractor)` - Ready to run extractions
    /// * `Err(reqwest::Error)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config.fetcher)?;
        Ok(Self {
            client,
            fetcher: config.fetcher.clone(),
            query_policy: config.extractor.query,
        })
    }

    pub fn query_policy(&self) -> QueryPolicy {
        self.query_policy
    }

    /// Extracts the same-origin sitemap of one page
    ///
    /// # Pipeline
    ///
    /// 1. Validate the input URL (no network access on failure)
    /// 2. Fetch the page body
    /// 3. Parse the HTML and collect, filter, dedupe, and sort links
    ///
    /// Steps run strictly in order. `elapsed_ms` covers steps 2 and 3.
    ///
    /// # Arguments
    ///
    /// * `raw_url` - The URL as supplied by the caller
    ///
    /// # Returns
    ///
    /// * `Ok(ExtractionResult)` - Links extracted (possibly none)
    /// * `Err(ExtractError)` - Validation or fetch failed
    pub async fn extract(&self, raw_url: &str) -> ExtractResult<ExtractionResult> {
        let page_url = validate_input_url(raw_url)?;
        let base_url = origin_string(&page_url);

        tracing::info!("Extracting links from {}", page_url);
        let started = Instant::now();

        let page = fetch_page(&self.client, &self.fetcher, &page_url).await?;
        let links = collect_links(&page.body, &page_url, self.query_policy);

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let result = ExtractionResult::new(base_url, links, elapsed_ms);

        tracing::info!(
            "Found {} same-origin links on {} in {}ms",
            result.total_links,
            page_url,
            result.elapsed_ms
        );

        Ok(result)
    }
}
