//! Extractor module for single-page link extraction
//!
//! This module contains the whole request pipeline:
//! - HTTP fetching with timeout and error classification
//! - HTML parsing and same-origin link collection
//! - The `Extractor` that runs validate → fetch → parse → collect → sort

mod fetcher;
mod parser;
mod pipeline;

pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use parser::{collect_links, LinkRecord, LINK_PLACEHOLDER_TITLE, MAX_TITLE_CHARS};
pub use pipeline::{ExtractionResult, Extractor};
