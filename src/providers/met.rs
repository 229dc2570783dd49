//! The Metropolitan Museum of Art open-access API — two-phase adapter.
//!
//! Phase 1 resolves a keyword to native object ids via the collection
//! search endpoint. Phase 2 fans out one detail request per id, all
//! concurrently, and keeps whichever detail fetches settle successfully
//! and carry an image. One slow or failing detail fetch never blocks or
//! cancels its siblings.

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::http;
use crate::provider::ProviderAdapter;
use crate::types::{ArtworkRecord, Provider};
use serde::Deserialize;
use url::Url;

const MET_SEARCH: &str = "https://collectionapi.metmuseum.org/public/collection/v1/search";
const MET_OBJECT: &str = "https://collectionapi.metmuseum.org/public/collection/v1/objects/";

/// Two-phase adapter for the Met collection API.
pub struct MetProvider;

/// Phase-1 response: the search endpoint returns ids only.
#[derive(Debug, Deserialize)]
struct MetSearchResponse {
    #[serde(rename = "objectIDs")]
    object_ids: Option<Vec<u64>>,
}

/// Phase-2 response: one object record per detail request.
///
/// Fields default to empty so a sparse object deserializes instead of
/// failing; the image-presence filter decides what survives.
#[derive(Debug, Deserialize)]
struct MetObject {
    #[serde(rename = "objectID")]
    object_id: u64,
    #[serde(default)]
    title: String,
    #[serde(rename = "artistDisplayName", default)]
    artist_display_name: String,
    #[serde(rename = "objectDate", default)]
    object_date: String,
    #[serde(rename = "primaryImageSmall", default)]
    primary_image_small: String,
}

impl ProviderAdapter for MetProvider {
    async fn search(
        &self,
        keyword: &str,
        max_results: usize,
        config: &GalleryConfig,
    ) -> Result<Vec<ArtworkRecord>, GalleryError> {
        tracing::trace!(keyword, "Met search");

        let client = http::build_client(config)?;

        let mut search_url = Url::parse(MET_SEARCH)
            .map_err(|e| GalleryError::Parse(format!("Met search URL: {e}")))?;
        search_url
            .query_pairs_mut()
            .append_pair("hasImages", "true")
            .append_pair("artistOrCulture", "true")
            .append_pair("q", keyword);

        let response: MetSearchResponse = http::get_json(&client, search_url.as_str()).await?;

        let ids: Vec<u64> = response
            .object_ids
            .unwrap_or_default()
            .into_iter()
            .take(max_results)
            .collect();

        tracing::debug!(count = ids.len(), "Met phase 1 resolved ids");

        // Zero ids short-circuits phase 2 entirely.
        if ids.is_empty() {
            return Ok(vec![]);
        }

        // Phase 2: concurrent detail fan-out. join_all waits for every
        // fetch to settle; failures and imageless objects are dropped.
        let detail_futures: Vec<_> = ids
            .iter()
            .map(|id| {
                let url = format!("{MET_OBJECT}{id}");
                // Client clones share the same connection pool.
                let client = client.clone();
                async move { http::get_json::<MetObject>(&client, &url).await }
            })
            .collect();

        let outcomes = futures::future::join_all(detail_futures).await;

        let mut records = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(object) => {
                    if let Some(record) = record_from_object(object) {
                        records.push(record);
                    }
                }
                Err(err) => {
                    tracing::trace!(error = %err, "Met detail fetch dropped");
                }
            }
        }

        tracing::debug!(count = records.len(), "Met records collected");
        Ok(records)
    }

    fn provider_type(&self) -> Provider {
        Provider::Met
    }
}

/// Map a Met object to an [`ArtworkRecord`], or `None` if it has no image.
///
/// Extracted as a separate function for testability with mock JSON.
fn record_from_object(object: MetObject) -> Option<ArtworkRecord> {
    if object.primary_image_small.is_empty() {
        return None;
    }
    Some(ArtworkRecord {
        id: format!("{}:{}", Provider::Met.prefix(), object.object_id),
        title: object.title,
        artist: object.artist_display_name,
        date_text: non_empty(object.object_date),
        thumbnail_url: object.primary_image_small,
        provider: Provider::Met,
    })
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
