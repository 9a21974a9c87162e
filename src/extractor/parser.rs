//! HTML parser for collecting same-origin links
//!
//! This module turns a page body into the sorted, deduplicated link list:
//! - `<a href="...">` anchors, in document order
//! - `<link rel="canonical|alternate" href="...">` meta links
//!
//! Parsing is tolerant: malformed markup still yields a best-effort tree.

use crate::url::{is_same_origin, normalize_link, resolve_href, QueryPolicy};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use url::Url;

/// Longest `title` attribute used as a display label (characters)
pub const MAX_TITLE_CHARS: usize = 199;

/// Label for anchors with neither a usable title attribute nor text
pub const LINK_PLACEHOLDER_TITLE: &str = "Link";

/// One entry of the sitemap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Absolute, normalized, same-origin URL
    pub url: String,

    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Collects the same-origin links of a page
///
/// Anchors are offered first, then canonical/alternate meta links; the first
/// occurrence of each normalized URL keeps its title. The result is sorted
/// by URL using plain byte-wise string ordering.
///
/// # Arguments
///
/// * `html` - The page body
/// * `page_url` - The URL the page was requested at (resolution base and origin)
/// * `policy` - Query string handling during normalization
///
/// # Example
///
/// ```
/// use sitemap_extractor::extractor::collect_links;
/// use sitemap_extractor::url::QueryPolicy;
/// use url::Url;
///
/// let html = r#"<a href="/b">B</a><a href="/a">A</a><a href="https://other.com/">X</a>"#;
/// let page = Url::parse("https://example.com/").unwrap();
/// let links = collect_links(html, &page, QueryPolicy::Strip);
/// assert_eq!(links.len(), 2);
/// assert_eq!(links[0].url, "https://example.com/a");
/// ```
pub fn collect_links(html: &str, page_url: &Url, policy: QueryPolicy) -> Vec<LinkRecord> {
    let document = Html::parse_document(html);
    let mut collector = LinkCollector::new(page_url, policy);

    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for element in document.select(&anchor_selector) {
            if let Some(href) = element.value().attr("href") {
                collector.offer(href, || Some(anchor_title(&element)));
            }
        }
    }

    if let Ok(meta_selector) = Selector::parse("link[rel][href]") {
        for element in document.select(&meta_selector) {
            let rel = match element.value().attr("rel").map(str::trim) {
                Some(rel) if is_meta_link_rel(rel) => rel,
                _ => continue,
            };

            if let Some(href) = element.value().attr("href") {
                collector.offer(href, || Some(format!("Meta Link ({})", rel)));
            }
        }
    }

    collector.into_sorted()
}

/// Accumulates normalized links keyed by URL
struct LinkCollector<'a> {
    page_url: &'a Url,
    policy: QueryPolicy,
    links: BTreeMap<String, Option<String>>,
}

impl<'a> LinkCollector<'a> {
    fn new(page_url: &'a Url, policy: QueryPolicy) -> Self {
        Self {
            page_url,
            policy,
            links: BTreeMap::new(),
        }
    }

    /// Resolves, filters, and records one candidate href
    ///
    /// The title is only computed when the URL is new.
    fn offer<F>(&mut self, href: &str, title: F)
    where
        F: FnOnce() -> Option<String>,
    {
        let resolved = match resolve_href(href, self.page_url) {
            Ok(Some(url)) => url,
            Ok(None) => {
                tracing::trace!("Skipping self-referencing href '{}'", href);
                return;
            }
            Err(e) => {
                tracing::debug!("Skipping unresolvable href: {}", e);
                return;
            }
        };

        if !is_same_origin(self.page_url, &resolved) {
            tracing::trace!("Skipping foreign-origin link {}", resolved);
            return;
        }

        let normalized = normalize_link(resolved, self.policy);

        if let Entry::Vacant(slot) = self.links.entry(normalized.into()) {
            slot.insert(title());
        }
    }

    fn into_sorted(self) -> Vec<LinkRecord> {
        self.links
            .into_iter()
            .map(|(url, title)| LinkRecord { url, title })
            .collect()
    }
}

/// Picks the display label for an anchor
///
/// Order: non-blank `title` attribute of at most [`MAX_TITLE_CHARS`],
/// then trimmed text content, then [`LINK_PLACEHOLDER_TITLE`].
fn anchor_title(element: &ElementRef<'_>) -> String {
    if let Some(title) = element.value().attr("title").map(str::trim) {
        let len = title.chars().count();
        if (1..=MAX_TITLE_CHARS).contains(&len) {
            return title.to_string();
        }
    }

    let text: String = element.text().collect();
    let text = text.trim();
    if text.is_empty() {
        LINK_PLACEHOLDER_TITLE.to_string()
    } else {
        text.to_string()
    }
}

fn is_meta_link_rel(rel: &str) -> bool {
    rel.eq_ignore_ascii_case("canonical") || rel.eq_ignore_ascii_case("alternate")
}
