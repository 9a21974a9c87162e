use crate::UrlError;
use serde::{Deserialize, Serialize};
use url::Url;

/// What happens to a link's query string during normalization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryPolicy {
    /// Drop the query string (`/page?a=1` and `/page?a=2` collapse together)
    #[default]
    Strip,
    /// Keep the query string as the URL parser serialized it
    Keep,
}

/// Resolves an href against the page it was found on
///
/// Follows standard base-URL resolution: protocol-relative (`//host/p`),
/// root-relative (`/p`), and document-relative (`p`, resolved against the
/// directory of the page path) references are all handled by the URL parser.
///
/// # Returns
///
/// * `Ok(Some(Url))` - The absolute URL
/// * `Ok(None)` - Empty or fragment-only href, which points back at the page itself
/// * `Err(UrlError)` - The href could not be resolved
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_extractor::url::resolve_href;
///
/// let page = Url::parse("https://example.com/a/b").unwrap();
/// let resolved = resolve_href("e", &page).unwrap().unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/a/e");
/// assert!(resolve_href("#section", &page).unwrap().is_none());
/// ```
pub fn resolve_href(href: &str, page_url: &Url) -> Result<Option<Url>, UrlError> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return Ok(None);
    }

    page_url
        .join(href)
        .map(Some)
        .map_err(|e| UrlError::Malformed(format!("cannot resolve '{}': {}", href, e)))
}

/// Normalizes a resolved link into its dedup key form
///
/// The fragment is always removed; the query string follows `policy`.
/// Nothing else is rewritten, so case and percent-encoding differences the
/// parser leaves alone stay distinct.
pub fn normalize_link(mut url: Url, policy: QueryPolicy) -> Url {
    url.set_fragment(None);

    if policy == QueryPolicy::Strip {
        url.set_query(None);
    }

    url
}
