//! Output module for presenting extraction results
//!
//! This module handles:
//! - The JSON response envelope shared by the endpoint and `--json`
//! - The line-per-URL `.txt` sitemap artifact and its filename
//! - Console formatting of results

mod display;
mod response;
mod text;

pub use display::{
    format_elapsed, format_file_size, page_count, paginate, print_result, truncate_text,
    RESULTS_PER_PAGE,
};
pub use response::{ErrorResponse, ScrapeRequest, ScrapeResponse, SuccessResponse};
pub use text::{sitemap_filename, sitemap_text, write_sitemap_file};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
