//! Art Institute of Chicago API — single-phase adapter.
//!
//! One search request returns inline records. Items without an `image_id`
//! are dropped; for the rest the thumbnail URL is built from the item's
//! image id via the IIIF template at a fixed width.

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::http;
use crate::provider::ProviderAdapter;
use crate::types::{ArtworkRecord, Provider};
use serde::Deserialize;
use url::Url;

const AIC_SEARCH: &str = "https://api.artic.edu/api/v1/artworks/search";
const AIC_FIELDS: &str = "id,title,image_id,artist_title,date_display";

/// Fixed IIIF rendering width for thumbnails.
const IIIF_WIDTH: u32 = 600;

/// Single-phase adapter for the Art Institute of Chicago API.
pub struct ArticProvider;

#[derive(Debug, Deserialize)]
struct ArticSearchResponse {
    #[serde(default)]
    data: Vec<ArticHit>,
}

#[derive(Debug, Deserialize)]
struct ArticHit {
    id: u64,
    #[serde(default)]
    title: String,
    image_id: Option<String>,
    artist_title: Option<String>,
    date_display: Option<String>,
}

impl ProviderAdapter for ArticProvider {
    async fn search(
        &self,
        keyword: &str,
        max_results: usize,
        config: &GalleryConfig,
    ) -> Result<Vec<ArtworkRecord>, GalleryError> {
        tracing::trace!(keyword, "Art Institute search");

        let client = http::build_client(config)?;

        let mut search_url = Url::parse(AIC_SEARCH)
            .map_err(|e| GalleryError::Parse(format!("Art Institute search URL: {e}")))?;
        search_url
            .query_pairs_mut()
            .append_pair("fields", AIC_FIELDS)
            .append_pair("q", keyword);

        let response: ArticSearchResponse = http::get_json(&client, search_url.as_str()).await?;

        let records = records_from_hits(response.data, max_results);
        tracing::debug!(count = records.len(), "Art Institute records collected");
        Ok(records)
    }

    fn provider_type(&self) -> Provider {
        Provider::Artic
    }
}

/// Filter and map response hits to records, bounded to `max_results`.
///
/// Response order is preserved. Extracted as a separate function for
/// testability with mock JSON.
fn records_from_hits(hits: Vec<ArticHit>, max_results: usize) -> Vec<ArtworkRecord> {
    hits.into_iter()
        .take(max_results)
        .filter_map(record_from_hit)
        .collect()
}

/// Map one hit to an [`ArtworkRecord`], or `None` if it has no image id.
fn record_from_hit(hit: ArticHit) -> Option<ArtworkRecord> {
    let image_id = hit.image_id.filter(|id| !id.is_empty())?;
    Some(ArtworkRecord {
        id: format!("{}:{}", Provider::Artic.prefix(), hit.id),
        title: hit.title,
        artist: hit.artist_title.unwrap_or_default(),
        date_text: hit.date_display.filter(|d| !d.is_empty()),
        thumbnail_url: iiif_url(&image_id, IIIF_WIDTH),
        provider: Provider::Artic,
    })
}

/// Build the IIIF image URL for an image id at the given width.
fn iiif_url(image_id: &str, width: u32) -> String {
    format!("https://www.artic.edu/iiif/2/{image_id}/full/{width},/0/default.jpg")
}
