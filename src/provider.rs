//! Trait definition for the catalog provider adapters.
//!
//! Exactly two providers exist (The Met and the Art Institute of Chicago),
//! each implementing [`ProviderAdapter`] to turn a keyword into a list of
//! normalized [`ArtworkRecord`]s.

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::types::{ArtworkRecord, Provider};

/// A catalog provider adapter.
///
/// Implementors query a specific museum API and map its wire format to
/// [`ArtworkRecord`]. Each adapter handles its own:
///
/// - URL construction with query encoding
/// - HTTP requests (single-phase or a two-phase search-then-detail fan-out)
/// - Validation of required fields, dropping malformed items silently
/// - The image-presence filter: records without a usable thumbnail are
///   never emitted
///
/// A keyword-level failure (non-success status, transport error, timeout,
/// undecodable body) surfaces as an `Err`; callers treat it as "no results
/// from this provider". Per-item failures inside a fan-out never escalate.
///
/// All implementations must be `Send + Sync` for concurrent provider queries.
pub trait ProviderAdapter: Send + Sync {
    /// Search this catalog for artworks matching `keyword`.
    ///
    /// Returns at most `max_results` records, each carrying a fetchable
    /// thumbnail URL and a provider-namespaced id.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError`] if the keyword-level request fails. An empty
    /// result list is a normal outcome, not an error.
    fn search(
        &self,
        keyword: &str,
        max_results: usize,
        config: &GalleryConfig,
    ) -> impl std::future::Future<Output = Result<Vec<ArtworkRecord>, GalleryError>> + Send;

    /// Returns which [`Provider`] variant this adapter represents.
    fn provider_type(&self) -> Provider;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A mock adapter for testing trait bounds and async execution.
    struct MockAdapter {
        provider: Provider,
        records: Vec<ArtworkRecord>,
    }

    impl MockAdapter {
        fn new(provider: Provider, records: Vec<ArtworkRecord>) -> Self {
            Self { provider, records }
        }

        fn failing(provider: Provider) -> Self {
            Self {
                provider,
                records: vec![],
            }
        }
    }

    impl ProviderAdapter for MockAdapter {
        async fn search(
            &self,
            _keyword: &str,
            max_results: usize,
            _config: &GalleryConfig,
        ) -> Result<Vec<ArtworkRecord>, GalleryError> {
            if self.records.is_empty() {
                return Err(GalleryError::Http("mock adapter failure".into()));
            }
            Ok(self.records.iter().take(max_results).cloned().collect())
        }

        fn provider_type(&self) -> Provider {
            self.provider
        }
    }

    fn make_record(id: &str) -> ArtworkRecord {
        ArtworkRecord {
            id: id.into(),
            title: "Irises".into(),
            artist: "Vincent van Gogh".into(),
            date_text: Some("1890".into()),
            thumbnail_url: "https://example.org/irises.jpg".into(),
            provider: Provider::Met,
        }
    }

    #[test]
    fn mock_adapter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockAdapter>();
    }

    #[tokio::test]
    async fn mock_adapter_returns_records() {
        let adapter = MockAdapter::new(Provider::Met, vec![make_record("met:1")]);
        let config = GalleryConfig::default();

        let records = adapter.search("irises", 10, &config).await;
        let records = records.expect("should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "met:1");
    }

    #[tokio::test]
    async fn mock_adapter_respects_max_results() {
        let adapter = MockAdapter::new(
            Provider::Met,
            vec![make_record("met:1"), make_record("met:2"), make_record("met:3")],
        );
        let config = GalleryConfig::default();

        let records = adapter.search("irises", 2, &config).await.expect("ok");
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn mock_adapter_propagates_errors() {
        let adapter = MockAdapter::failing(Provider::Artic);
        let config = GalleryConfig::default();

        let result = adapter.search("irises", 10, &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("mock adapter failure"));
    }

    #[test]
    fn provider_type_returns_correct_variant() {
        let adapter = MockAdapter::new(Provider::Artic, vec![]);
        assert_eq!(adapter.provider_type(), Provider::Artic);
    }
}
