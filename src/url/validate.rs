use crate::UrlError;
use url::Url;

/// Validates a raw string as an absolute `http`/`https` URL
///
/// Leading and trailing whitespace is ignored. No network access happens
/// here; this runs before any fetch is attempted.
///
/// # Arguments
///
/// * `raw` - The user-supplied URL string
///
/// # Returns
///
/// * `Ok(Url)` - Parsed URL with an http(s) scheme and a host
/// * `Err(UrlError)` - Empty, unparseable, wrong scheme, or hostless input
///
/// # Examples
///
/// ```
/// use sitemap_extractor::url::validate_input_url;
///
/// assert!(validate_input_url("https://example.com/a/b").is_ok());
/// assert!(validate_input_url("not a url").is_err());
/// assert!(validate_input_url("ftp://example.com/").is_err());
/// ```
pub fn validate_input_url(raw: &str) -> Result<Url, UrlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    let url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Returns true if the string is a valid absolute http(s) URL
pub fn is_valid_url(raw: &str) -> bool {
    validate_input_url(raw).is_ok()
}

/// Prefixes `https://` onto input typed without an http(s) scheme
///
/// Used by the command line only; the endpoint validates input as given.
pub fn complete_scheme(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    let lower = input.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}
