//! Integration tests for the extractor and the HTTP endpoint
//!
//! These tests use wiremock to stand in for the page being extracted.

mod extract_tests;

use sitemap_extractor::config::Config;

/// Configuration with a short timeout so failure cases finish quickly
pub fn test_config(timeout_secs: u64) -> Config {
    let mut config = Config::default();
    config.fetcher.timeout_secs = timeout_secs;
    config.fetcher.connect_timeout_secs = 1;
    config
}

/// A local port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe socket");
    listener
        .local_addr()
        .expect("Failed to read probe address")
        .port()
}

pub fn html_response(body: &str) -> wiremock::ResponseTemplate {
    wiremock::ResponseTemplate::new(200)
        .set_body_string(body.to_string())
        .insert_header("content-type", "text/html; charset=utf-8")
}
