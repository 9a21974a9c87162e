use url::Url;

/// Serializes a URL's origin as `scheme://host[:port]`
///
/// Default ports are omitted, matching how the URL parser stores them.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_extractor::url::origin_string;
///
/// let url = Url::parse("https://example.com/a/b?x=1").unwrap();
/// assert_eq!(origin_string(&url), "https://example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(origin_string(&url), "http://127.0.0.1:8080");
/// ```
pub fn origin_string(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Returns true when scheme, host, and effective port all match
///
/// URLs with opaque origins (`mailto:`, `javascript:`, `data:`) never match.
pub fn is_same_origin(a: &Url, b: &Url) -> bool {
    let origin = a.origin();
    origin.is_tuple() && origin == b.origin()
}

/// Lowercased host with a leading `www.` removed
pub fn display_host(url: &Url) -> Option<String> {
    url.host_str().map(|host| {
        let host = host.to_lowercase();
        match host.strip_prefix("www.") {
            Some(rest) => rest.to_string(),
            None => host,
        }
    })
}
