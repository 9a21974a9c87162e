//! HTTP endpoint serving extractions
//!
//! Exposes a single route, `POST /api/scrape`, taking `{ "url": string }`
//! and answering with the JSON envelope from [`crate::output::ScrapeResponse`].
//! The status code mirrors the failure class: 400 for bad input, the
//! upstream status for non-2xx pages, 500 for everything else.

use crate::config::Config;
use crate::extractor::Extractor;
use crate::output::{ScrapeRequest, ScrapeResponse};
use crate::{ConfigError, ExtractError, UrlError};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Route of the scrape endpoint
pub const SCRAPE_PATH: &str = "/api/scrape";

/// Builds the router around a shared extractor
pub fn router(extractor: Arc<Extractor>) -> Router {
    Router::new()
        .route(SCRAPE_PATH, post(scrape))
        .with_state(extractor)
}

/// Binds the configured address and serves until Ctrl-C
///
/// # Arguments
///
/// * `config` - The configuration; `server.bind-address` is used unless `bind` is given
/// * `bind` - Optional address overriding the configuration
pub async fn serve(config: &Config, bind: Option<&str>) -> crate::Result<()> {
    let address = bind.unwrap_or(config.server.bind_address.as_str());
    let address: SocketAddr = address.parse().map_err(|e| {
        ConfigError::InvalidAddress(format!("Invalid bind address '{}': {}", address, e))
    })?;

    let extractor = Arc::new(Extractor::new(config)?);
    let listener = TcpListener::bind(address).await?;
    tracing::info!(
        "Listening on http://{}{}",
        listener.local_addr()?,
        SCRAPE_PATH
    );

    axum::serve(listener, router(extractor))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn scrape(State(extractor): State<Arc<Extractor>>, body: Bytes) -> Response {
    let outcome = match parse_request(&body) {
        Ok(url) => extractor.extract(&url).await,
        Err(e) => Err(e),
    };

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Scrape request failed: {}", e);
            StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    (status, Json(ScrapeResponse::from_outcome(&outcome))).into_response()
}

/// Pulls the URL out of the request body
fn parse_request(body: &[u8]) -> Result<String, ExtractError> {
    let request: ScrapeRequest = serde_json::from_slice(body).map_err(|e| {
        ExtractError::InvalidRequest(format!(
            "body must be a JSON object with a \"url\" field ({})",
            e
        ))
    })?;

    match request.url {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(ExtractError::InvalidInput(UrlError::Empty)),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
