//! HTTP client for the analysis service.
//!
//! This module wraps reqwest to provide the single outbound call the client
//! makes. reqwest works on both native and WASM platforms:
//! - Native: Uses hyper with rustls-tls for HTTPS
//! - WASM: Uses browser fetch() API internally
//!
//! The client issues exactly one GET per invocation. There are no retries and
//! no debouncing; a failed analysis requires explicit user resubmission.

use once_cell::sync::Lazy;
use reqwest::header::ACCEPT;
use url::Url;

use super::types::{AnalysisResult, ErrorBody};
use crate::error::ApiError;

/// Global HTTP client for connection reuse.
///
/// Native builds enforce a 30 second timeout per request so a stalled
/// analysis cannot leave the view loading forever. The timeout builder is
/// unavailable on WASM, where the browser's fetch defaults apply.
#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("CinemaMatch/0.1.0 (movie similarity client)")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(target_arch = "wasm32")]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Build the `/analyze` request URL with the movie title as a query parameter.
///
/// The title is URL-encoded by the query serializer; callers pass it trimmed.
pub fn analyze_url(base_url: &str, movie_title: &str) -> Result<Url, ApiError> {
    let endpoint = format!("{}/analyze", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&endpoint)
        .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::InvalidUrl(format!(
            "Unsupported scheme: {} (only http/https allowed)",
            url.scheme()
        )));
    }

    url.query_pairs_mut().append_pair("movie_title", movie_title);
    Ok(url)
}

/// Ask the analysis service for movies similar to `movie_title`.
///
/// On success the full response body is returned as-is; ranking is the
/// server's and the caller must preserve vector order. Non-success statuses
/// surface the body's `detail` field when present. Transport and decoding
/// failures map to their own [`ApiError`] variants so the view layer can pick
/// the right display message.
pub async fn analyze(base_url: &str, movie_title: &str) -> Result<AnalysisResult, ApiError> {
    let url = analyze_url(base_url, movie_title)?;

    let response = HTTP_CLIENT
        .get(url.clone())
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to reach {}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        // The service reports failures as {"detail": "..."}; anything else
        // (HTML error pages, empty bodies) falls back to the generic message.
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => String::new(),
        };
        return Err(ApiError::Service {
            status: status.as_u16(),
            detail,
        });
    }

    response
        .json::<AnalysisResult>()
        .await
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
