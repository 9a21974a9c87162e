//! URL handling module for Sitemap Extractor
//!
//! This module provides input validation, origin comparison, and resolution
//! plus normalization of the hrefs found on a page.

mod domain;
mod normalize;
mod validate;

// Re-export main functions
pub use domain::{display_host, is_same_origin, origin_string};
pub use normalize::{normalize_link, resolve_href, QueryPolicy};
pub use validate::{complete_scheme, is_valid_url, validate_input_url};
