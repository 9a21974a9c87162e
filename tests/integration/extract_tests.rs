use crate::{closed_port, html_response, test_config};
use sitemap_extractor::config::Config;
use sitemap_extractor::extractor::Extractor;
use sitemap_extractor::{ExtractError, NetworkErrorKind, QueryPolicy, UpstreamCategory};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>Sample</title>
    <link rel="canonical" href="/a/b">
    <link rel="alternate" type="application/rss+xml" href="/feed.xml">
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <nav>
        <a href="#section">Skip</a>
        <a href="/c/d">Root relative</a>
        <a href="e" title="Sibling page">Document relative</a>
        <a href="https://other.com/x">Elsewhere</a>
        <a href="/c/d?utm_source=nav#top">Duplicate</a>
        <a href="http://[broken">Broken</a>
        <a href="mailto:someone@example.com">Mail</a>
    </nav>
</body>
</html>"##;

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_response(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_extracts_same_origin_links() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();
    mount_page(&mock_server, "/a/b", SAMPLE_PAGE).await;

    let extractor = Extractor::new(&Config::default()).expect("Failed to build extractor");
    let result = extractor
        .extract(&format!("{}/a/b", base))
        .await
        .expect("Extraction failed");

    assert_eq!(result.base_url, base);
    let urls: Vec<&str> = result.urls().collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/a/b", base),
            format!("{}/a/e", base),
            format!("{}/c/d", base),
            format!("{}/feed.xml", base),
        ]
    );
    assert_eq!(result.total_links, result.links.len());

    let titles: Vec<Option<&str>> = result.links.iter().map(|l| l.title.as_deref()).collect();
    assert_eq!(
        titles,
        vec![
            Some("Meta Link (canonical)"),
            Some("Sibling page"),
            Some("Root relative"),
            Some("Meta Link (alternate)"),
        ]
    );
}

#[tokio::test]
async fn test_every_link_shares_the_page_origin() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/a/b", SAMPLE_PAGE).await;

    let extractor = Extractor::new(&Config::default()).unwrap();
    let result = extractor
        .extract(&format!("{}/a/b", mock_server.uri()))
        .await
        .unwrap();

    for link in &result.links {
        let url = url::Url::parse(&link.url).unwrap();
        assert_eq!(url.origin().ascii_serialization(), result.base_url);
    }

    let mut sorted = result.links.clone();
    sorted.sort_by(|a, b| a.url.cmp(&b.url));
    sorted.dedup_by(|a, b| a.url == b.url);
    assert_eq!(sorted, result.links);
}

#[tokio::test]
async fn test_repeated_extraction_is_identical() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/a/b", SAMPLE_PAGE).await;

    let extractor = Extractor::new(&Config::default()).unwrap();
    let url = format!("{}/a/b", mock_server.uri());
    let first = extractor.extract(&url).await.unwrap();
    let second = extractor.extract(&url).await.unwrap();

    assert_eq!(first.base_url, second.base_url);
    assert_eq!(first.links, second.links);
}

#[tokio::test]
async fn test_keep_query_policy() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        r#"<a href="/list?page=2#results">Next</a><a href="/list">List</a>"#,
    )
    .await;

    let mut config = Config::default();
    config.extractor.query = QueryPolicy::Keep;
    let extractor = Extractor::new(&config).unwrap();
    let result = extractor
        .extract(&format!("{}/", mock_server.uri()))
        .await
        .unwrap();

    let urls: Vec<&str> = result.urls().collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/list", mock_server.uri()),
            format!("{}/list?page=2", mock_server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_page_without_links() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/empty",
        "<html><body><p>No links at all</p><a href=\"https://other.com/\">x</a></body></html>",
    )
    .await;

    let extractor = Extractor::new(&Config::default()).unwrap();
    let result = extractor
        .extract(&format!("{}/empty", mock_server.uri()))
        .await
        .unwrap();

    assert!(result.links.is_empty());
    assert_eq!(result.total_links, 0);
}

#[tokio::test]
async fn test_sends_configured_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestAgent/1.0"))
        .and(header("accept", "text/html"))
        .respond_with(html_response(r#"<a href="/ok">ok</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.fetcher.user_agent = "TestAgent/1.0".to_string();
    config.fetcher.accept = "text/html".to_string();
    let extractor = Extractor::new(&config).unwrap();
    let result = extractor
        .extract(&format!("{}/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(result.total_links, 1);
}

#[tokio::test]
async fn test_upstream_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let extractor = Extractor::new(&Config::default()).unwrap();
    let err = extractor
        .extract(&format!("{}/missing", mock_server.uri()))
        .await
        .unwrap_err();

    match &err {
        ExtractError::UpstreamHttp {
            status,
            reason,
            category,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(reason, "Not Found");
            assert_eq!(*category, UpstreamCategory::NotFound);
        }
        other => panic!("Expected UpstreamHttp, got {:?}", other),
    }
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_upstream_server_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let extractor = Extractor::new(&Config::default()).unwrap();
    let err = extractor
        .extract(&format!("{}/", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ExtractError::UpstreamHttp {
            status: 503,
            category: UpstreamCategory::ServerError,
            ..
        }
    ));
}

#[tokio::test]
async fn test_timeout_is_classified() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response("<a href=\"/late\">late</a>").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let extractor = Extractor::new(&test_config(1)).unwrap();
    let err = extractor
        .extract(&format!("{}/", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ExtractError::Timeout { timeout_secs: 1, .. }),
        "Expected timeout, got {:?}",
        err
    );
    assert_eq!(err.status_code(), 500);
    assert!(err.public_message().contains("timeout"));
}

#[tokio::test]
async fn test_connection_refused_is_classified() {
    let port = closed_port();

    let extractor = Extractor::new(&test_config(5)).unwrap();
    let err = extractor
        .extract(&format!("http://127.0.0.1:{}/", port))
        .await
        .unwrap_err();

    match &err {
        ExtractError::Network { kind, .. } => {
            assert_eq!(*kind, NetworkErrorKind::ConnectionRefused)
        }
        other => panic!("Expected network error, got {:?}", other),
    }
    assert_eq!(err.status_code(), 500);
    assert!(!err.public_message().contains("timeout"));
}

#[tokio::test]
async fn test_invalid_input_makes_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let extractor = Extractor::new(&Config::default()).unwrap();
    let err = extractor.extract("not a url").await.unwrap_err();

    assert!(matches!(err, ExtractError::InvalidInput(_)));
    assert_eq!(err.status_code(), 400);
}
