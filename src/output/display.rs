//! Console formatting helpers

use crate::extractor::{ExtractionResult, LinkRecord};

/// Links shown per page in the human listing
pub const RESULTS_PER_PAGE: usize = 50;

/// Longest title printed next to a URL
const DISPLAY_TITLE_CHARS: usize = 60;

/// Formats a duration in milliseconds for humans
///
/// `850ms`, `2.5s`, `3m 5s`, `1h 2m`.
pub fn format_elapsed(ms: u64) -> String {
    if ms < 1_000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1_000.0)
    } else if ms < 3_600_000 {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1_000)
    } else {
        format!("{}h {}m", ms / 3_600_000, (ms % 3_600_000) / 60_000)
    }
}

/// Formats a byte count with base-1024 units
///
/// Up to two decimals, trailing zeros dropped: `0 Bytes`, `512 Bytes`, `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Shortens text to `max_chars` characters, appending `...` when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Number of pages needed for `total` items
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Returns the 1-based `page` of `links`; empty when out of range
pub fn paginate(links: &[LinkRecord], page: usize, per_page: usize) -> &[LinkRecord] {
    if page == 0 || per_page == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(per_page);
    if start >= links.len() {
        return &[];
    }

    let end = start.saturating_add(per_page).min(links.len());
    &links[start..end]
}

/// Prints a human-readable listing to stdout
///
/// With `page` set, only that page of [`RESULTS_PER_PAGE`] links is listed.
pub fn print_result(result: &ExtractionResult, page: Option<usize>) {
    println!("=== Sitemap for {} ===\n", result.base_url);
    println!("  Links found: {}", result.total_links);
    println!("  Time: {}", format_elapsed(result.elapsed_ms));

    let (shown, offset) = match page {
        Some(page) => {
            let pages = page_count(result.links.len(), RESULTS_PER_PAGE);
            println!("  Page: {} of {}", page, pages.max(1));
            (
                paginate(&result.links, page, RESULTS_PER_PAGE),
                page.saturating_sub(1) * RESULTS_PER_PAGE,
            )
        }
        None => (result.links.as_slice(), 0),
    };
    println!();

    if result.is_empty() {
        println!("No same-origin links found.");
        return;
    }

    for (i, link) in shown.iter().enumerate() {
        match &link.title {
            Some(title) => println!(
                "{:>5}. {}  ({})",
                offset + i + 1,
                link.url,
                truncate_text(title, DISPLAY_TITLE_CHARS)
            ),
            None => println!("{:>5}. {}", offset + i + 1, link.url),
        }
    }
}
