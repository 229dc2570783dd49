//! Error types for the gallery-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Individual fetch failures are absorbed at
//! the adapter boundary and never surface here; only whole-operation
//! failures do.

/// Errors that can occur during artwork search operations.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Every configured provider failed and nothing was collected.
    /// Distinguishes "service unavailable" from a valid empty result set.
    #[error("all providers failed: {0}")]
    AllProvidersFailed(String),

    /// A network request exceeded its deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// A connection-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A provider response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for gallery-search results.
pub type Result<T> = std::result::Result<T, GalleryError>;
