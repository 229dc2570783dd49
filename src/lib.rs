//! # gallery-search
//!
//! Embedded artwork search for the gallery app.
//!
//! This crate aggregates artwork records from two museum catalog APIs —
//! The Metropolitan Museum of Art and the Art Institute of Chicago — and
//! compiles into the app as a library dependency. No API keys, no external
//! services, no user setup required.
//!
//! ## Design
//!
//! - Queries both catalogs concurrently and merges results, tolerating
//!   partial failure: if one catalog is down, the other still answers
//! - Deduplicates by a normalized artist|title identity key, since the
//!   same physical work appears in both catalogs under different ids
//! - Ranks with weighted fuzzy matching (artist 0.7, title 0.3) and a
//!   substring fallback when fuzzy recall is too low
//! - Every record carries a fetchable thumbnail URL; imageless catalog
//!   entries are dropped at the adapter boundary
//! - In-memory TTL cache for ranked results
//! - A "pick of the day" sampler draws one random artwork via a bounded,
//!   retried random-keyword search
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners — this is a library, not a server
//! - Search queries are logged only at trace level

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod daily;
pub mod error;
pub mod http;
pub mod provider;
pub mod providers;
pub mod types;

pub use config::GalleryConfig;
pub use error::{GalleryError, Result};
pub use provider::ProviderAdapter;
pub use types::{ArtworkRecord, Provider};

/// Search both catalogs for artworks matching a free-text query.
///
/// Queries all providers in `config` concurrently, merges and dedupes
/// their records, ranks the merged set against `query`, and returns up
/// to `config.rank_cap` records. An empty or whitespace-only query
/// returns an empty list without any network traffic.
///
/// # Errors
///
/// Returns [`GalleryError::AllProvidersFailed`] if every provider fails.
/// Individual provider failures are logged but do not cause the overall
/// search to fail as long as at least one provider answered.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gallery_search::Result<()> {
/// let config = gallery_search::GalleryConfig::default();
/// let records = gallery_search::search("water lilies", &config).await?;
/// for record in &records {
///     println!("{} — {}", record.artist, record.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &GalleryConfig) -> Result<Vec<ArtworkRecord>> {
    config.validate()?;
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }
    aggregate::search::orchestrate_search(query, config).await
}

/// Search with sensible default configuration.
///
/// Convenience wrapper around [`search`] using [`GalleryConfig::default()`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(query: &str) -> Result<Vec<ArtworkRecord>> {
    search(query, &GalleryConfig::default()).await
}

/// Sample one artwork at random for the "pick of the day".
///
/// Retries a random-keyword search over both catalogs up to
/// `config.pick_max_attempts` times and samples uniformly from the first
/// non-empty merged result set. Returns `Ok(None)` when every attempt
/// came back empty — callers should treat that as "no pick available",
/// not a failure.
///
/// # Errors
///
/// Returns [`GalleryError::Config`] if the configuration is invalid.
/// Provider failures during sampling are absorbed, never surfaced.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gallery_search::Result<()> {
/// if let Some(pick) = gallery_search::pick_of_the_day_default().await? {
///     println!("today: {} — {}", pick.artist, pick.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn pick_of_the_day(config: &GalleryConfig) -> Result<Option<ArtworkRecord>> {
    config.validate()?;
    daily::pick_of_the_day(config).await
}

/// Daily pick with sensible default configuration.
///
/// # Errors
///
/// Same as [`pick_of_the_day`].
pub async fn pick_of_the_day_default() -> Result<Option<ArtworkRecord>> {
    pick_of_the_day(&GalleryConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_rank_cap() {
        let config = GalleryConfig {
            rank_cap: 0,
            ..Default::default()
        };
        let result = search("monet", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("rank_cap"));
    }

    #[tokio::test]
    async fn search_validates_config_empty_providers() {
        let config = GalleryConfig {
            providers: vec![],
            ..Default::default()
        };
        let result = search("monet", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("provider"));
    }

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = GalleryConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        let result = search("monet", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn empty_query_short_circuits_without_network() {
        let records = search("", &GalleryConfig::default()).await.expect("ok");
        assert!(records.is_empty());

        let records = search("   \t ", &GalleryConfig::default()).await.expect("ok");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn pick_validates_config_zero_attempts() {
        let config = GalleryConfig {
            pick_max_attempts: 0,
            ..Default::default()
        };
        let result = pick_of_the_day(&config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("pick_max_attempts"));
    }
}
