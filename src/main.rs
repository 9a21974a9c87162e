//! Sitemap Extractor main entry point
//!
//! This is the command-line interface: a one-shot extraction printed to the
//! terminal (or written to a `.txt` sitemap), or the HTTP endpoint.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use sitemap_extractor::config::{load_config_or_default, Config};
use sitemap_extractor::extractor::Extractor;
use sitemap_extractor::output::{
    format_file_size, print_result, sitemap_text, write_sitemap_file, ScrapeResponse,
};
use sitemap_extractor::server::serve;
use sitemap_extractor::url::{complete_scheme, validate_input_url};
use sitemap_extractor::QueryPolicy;
use tracing_subscriber::EnvFilter;

/// Sitemap Extractor: same-origin links of a single page
///
/// Fetches one page, collects its anchors and canonical/alternate links,
/// keeps those on the page's own origin, and prints them sorted and
/// deduplicated.
#[derive(Parser, Debug)]
#[command(name = "sitemap-extractor")]
#[command(version)]
#[command(about = "Extract same-origin links from one page as a sitemap", long_about = None)]
struct Cli {
    /// Page to extract links from (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL", required_unless_present = "serve")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Serve POST /api/scrape instead of running a single extraction
    #[arg(long, conflicts_with_all = ["url", "json", "plain", "save", "page"])]
    serve: bool,

    /// Address to listen on, overriding server.bind-address
    #[arg(long, value_name = "ADDR", requires = "serve")]
    bind: Option<String>,

    /// Print the JSON response envelope
    #[arg(long, conflicts_with_all = ["plain", "page"])]
    json: bool,

    /// Print one URL per line and nothing else
    #[arg(long, conflicts_with = "page")]
    plain: bool,

    /// Write the sitemap to sitemap-<domain>-<date>.txt
    #[arg(long)]
    save: bool,

    /// Directory for --save (defaults to the current directory)
    #[arg(long, value_name = "DIR", requires = "save")]
    output_dir: Option<PathBuf>,

    /// Show only page N of the listing (50 links per page)
    #[arg(long, value_name = "N", value_parser = parse_page)]
    page: Option<usize>,

    /// Keep query strings instead of stripping them
    #[arg(long)]
    keep_query: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Invalid default configuration".to_string(),
        }
    })?;

    if cli.keep_query {
        config.extractor.query = QueryPolicy::Keep;
    }

    if cli.serve {
        serve(&config, cli.bind.as_deref())
            .await
            .context("Server failed")?;
        return Ok(());
    }

    let raw_url = cli.url.as_deref().unwrap_or_default();
    handle_extract(&config, &cli, raw_url).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_extractor=info,warn"),
            1 => EnvFilter::new("sitemap_extractor=debug,info"),
            2 => EnvFilter::new("sitemap_extractor=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one extraction and presents it according to the flags
async fn handle_extract(config: &Config, cli: &Cli, raw_url: &str) -> anyhow::Result<()> {
    let input = complete_scheme(raw_url);
    let extractor = Extractor::new(config).context("Failed to build HTTP client")?;

    let outcome = extractor.extract(&input).await;

    if cli.json {
        let response = ScrapeResponse::from_outcome(&outcome);
        println!("{}", response.to_json_pretty()?);
    }

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Extraction failed: {}", e.public_message());
            return Err(e.into());
        }
    };

    if cli.plain {
        if !result.is_empty() {
            println!("{}", sitemap_text(&result));
        }
    } else if !cli.json {
        print_result(&result, cli.page);
    }

    if cli.save {
        let page_url = validate_input_url(&input)?;
        let dir = cli.output_dir.as_deref().unwrap_or(Path::new("."));
        let today = chrono::Local::now().date_naive();
        let path = write_sitemap_file(&result, &page_url, dir, today)?;
        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        eprintln!(
            "✓ Saved {} URLs to {} ({})",
            result.total_links,
            path.display(),
            format_file_size(size)
        );
    }

    Ok(())
}

/// Parses a 1-based page number
fn parse_page(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("page numbers start at 1".to_string()),
        Ok(page) => Ok(page),
        Err(e) => Err(e.to_string()),
    }
}
