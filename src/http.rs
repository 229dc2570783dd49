//! Shared HTTP client and JSON fetch helper for catalog requests.
//!
//! Provides a configured [`reqwest::Client`] with a per-request timeout
//! taken from the config, and a typed JSON GET helper that maps deadline
//! expiry and transport failures to distinct error variants.

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default User-Agent sent to catalog APIs.
const DEFAULT_USER_AGENT: &str = concat!("gallery-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for catalog API requests.
///
/// The client has:
/// - Timeout from `config.timeout_ms`, applied to every request
/// - Gzip decompression
/// - The crate User-Agent (or a custom one if configured)
///
/// # Errors
///
/// Returns [`GalleryError::Http`] if the client cannot be constructed.
pub fn build_client(config: &GalleryConfig) -> Result<reqwest::Client, GalleryError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => DEFAULT_USER_AGENT.to_owned(),
    };

    reqwest::Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| GalleryError::Http(format!("failed to build HTTP client: {e}")))
}

/// GET a URL and decode its JSON body into `T`.
///
/// Each call is bounded by the client timeout; on expiry the in-flight
/// request is dropped and [`GalleryError::Timeout`] is returned, so a slow
/// fetch never blocks or cancels its siblings.
///
/// # Errors
///
/// - [`GalleryError::Timeout`] if the deadline expired
/// - [`GalleryError::Http`] on transport failure or non-success status
/// - [`GalleryError::Parse`] if the body is not valid JSON for `T`
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, GalleryError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(classify_request_error)?
        .error_for_status()
        .map_err(|e| GalleryError::Http(format!("{url}: {e}")))?;

    response
        .json::<T>()
        .await
        .map_err(|e| GalleryError::Parse(format!("{url}: {e}")))
}

/// Map a reqwest send error to [`GalleryError::Timeout`] or [`GalleryError::Http`].
fn classify_request_error(err: reqwest::Error) -> GalleryError {
    if err.is_timeout() {
        GalleryError::Timeout(err.to_string())
    } else {
        GalleryError::Http(err.to_string())
    }
}
