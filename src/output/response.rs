//! JSON request and response bodies of the scrape endpoint

use crate::extractor::{ExtractionResult, LinkRecord};
use crate::output::{OutputError, OutputResult};
use crate::{ExtractError, ExtractResult};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/scrape`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful extraction envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub success: bool,
    pub data: Vec<LinkRecord>,
    pub total_links: usize,
    /// Milliseconds
    pub crawl_time: u64,
    pub base_url: String,
}

/// Failed extraction envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Either envelope, serialized without a wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapeResponse {
    Success(SuccessResponse),
    Failure(ErrorResponse),
}

impl From<&ExtractionResult> for SuccessResponse {
    fn from(result: &ExtractionResult) -> Self {
        Self {
            success: true,
            data: result.links.clone(),
            total_links: result.total_links,
            crawl_time: result.elapsed_ms,
            base_url: result.base_url.clone(),
        }
    }
}

impl From<&ExtractError> for ErrorResponse {
    fn from(error: &ExtractError) -> Self {
        Self {
            success: false,
            error: error.public_message(),
        }
    }
}

impl ScrapeResponse {
    /// Builds the envelope for an extraction outcome
    pub fn from_outcome(outcome: &ExtractResult<ExtractionResult>) -> Self {
        match outcome {
            Ok(result) => Self::Success(result.into()),
            Err(error) => Self::Failure(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Renders the envelope as pretty JSON
    pub fn to_json_pretty(&self) -> OutputResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| OutputError::Format(e.to_string()))
    }
}
