//! Plain-text sitemap artifact

use crate::extractor::ExtractionResult;
use crate::output::OutputResult;
use crate::url::display_host;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Joins the sitemap URLs, one per line, without a trailing newline
pub fn sitemap_text(result: &ExtractionResult) -> String {
    result.urls().collect::<Vec<_>>().join("\n")
}

/// Builds `sitemap-<host>-<YYYY-MM-DD>.txt`
///
/// The host is lowercased with a leading `www.` removed. URLs without a
/// host fall back to `sitemap-<YYYY-MM-DD>.txt`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sitemap_extractor::output::sitemap_filename;
/// use url::Url;
///
/// let url = Url::parse("https://www.example.com/blog").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(sitemap_filename(&url, date), "sitemap-example.com-2024-03-09.txt");
/// ```
pub fn sitemap_filename(page_url: &Url, date: NaiveDate) -> String {
    let date = date.format("%Y-%m-%d");
    match display_host(page_url) {
        Some(host) if !host.is_empty() => format!("sitemap-{}-{}.txt", host, date),
        _ => format!("sitemap-{}.txt", date),
    }
}

/// Writes the sitemap artifact into `dir` and returns its path
///
/// # Arguments
///
/// * `result` - The extraction to write
/// * `page_url` - The requested page, used for the filename
/// * `dir` - Target directory (created if missing)
/// * `date` - Date stamped into the filename
pub fn write_sitemap_file(
    result: &ExtractionResult,
    page_url: &Url,
    dir: &Path,
    date: NaiveDate,
) -> OutputResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(sitemap_filename(page_url, date));
    fs::write(&path, sitemap_text(result))?;

    tracing::info!("Wrote {} URLs to {}", result.total_links, path.display());
    Ok(path)
}
