//! Daily-pick sampler: one random artwork from a retried keyword search.
//!
//! Each attempt draws a keyword uniformly at random from a fixed pool of
//! well-known artist names, fans the keyword out to both providers, merges
//! the results, and samples one record uniformly on the first non-empty
//! merge. The loop is bounded by an explicit attempt counter; exhaustion
//! yields `None`, never an error.

use rand::seq::SliceRandom;

use crate::aggregate::merge::merge_records;
use crate::aggregate::search::fan_out;
use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::types::ArtworkRecord;

/// Keyword pool for daily-pick attempts. Well-known names keep the hit
/// rate high across both catalogs.
pub const POPULAR_KEYWORDS: &[&str] = &[
    "Van Gogh",
    "Monet",
    "Picasso",
    "Rembrandt",
    "Da Vinci",
    "Matisse",
    "Klimt",
    "Renoir",
    "Degas",
    "Goya",
    "Cézanne",
    "Turner",
];

/// Sample one artwork from a bounded, retried random keyword search.
///
/// Runs up to `config.pick_max_attempts` attempts. Each attempt queries
/// every configured provider concurrently with a random keyword (bounded
/// to `config.pick_max_per_provider` records each) and merges the lists;
/// the first non-empty merge terminates the loop with a uniformly sampled
/// record. Provider failures inside an attempt are absorbed as empty
/// lists. Returns `Ok(None)` when every attempt merged empty.
pub async fn pick_of_the_day(
    config: &GalleryConfig,
) -> Result<Option<ArtworkRecord>, GalleryError> {
    for attempt in 1..=config.pick_max_attempts {
        // The rng handle must not live across an await point.
        let keyword = {
            let mut rng = rand::thread_rng();
            POPULAR_KEYWORDS
                .choose(&mut rng)
                .copied()
                .unwrap_or(POPULAR_KEYWORDS[0])
        };
        tracing::debug!(attempt, keyword, "daily pick attempt");

        let outcomes = fan_out(keyword, config.pick_max_per_provider, config).await;

        let mut lists: Vec<Vec<ArtworkRecord>> = Vec::with_capacity(outcomes.len());
        for (provider, outcome) in outcomes {
            match outcome {
                Ok(records) => lists.push(records),
                Err(err) => {
                    tracing::warn!(%provider, error = %err, "provider failed during daily pick");
                    lists.push(Vec::new());
                }
            }
        }

        let merged = merge_records(lists);
        if merged.is_empty() {
            tracing::debug!(attempt, keyword, "daily pick attempt merged empty");
            continue;
        }

        let pick = {
            let mut rng = rand::thread_rng();
            merged.choose(&mut rng).cloned()
        };
        if let Some(record) = pick {
            tracing::debug!(attempt, id = %record.id, "daily pick selected");
            return Ok(Some(record));
        }
    }

    tracing::debug!(
        attempts = config.pick_max_attempts,
        "daily pick retry budget exhausted"
    );
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_pool_is_non_empty_and_distinct() {
        assert_eq!(POPULAR_KEYWORDS.len(), 12);
        let mut sorted: Vec<&str> = POPULAR_KEYWORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), POPULAR_KEYWORDS.len());
    }

    #[tokio::test]
    async fn exhausts_budget_and_returns_none_with_no_providers() {
        // With no providers every attempt merges empty, so the sampler
        // must walk its full budget and terminate with None — without any
        // network traffic.
        let config = GalleryConfig {
            providers: vec![],
            pick_max_attempts: 3,
            ..Default::default()
        };
        let pick = pick_of_the_day(&config).await.expect("never errors");
        assert!(pick.is_none());
    }

    #[tokio::test]
    async fn single_attempt_budget_respected() {
        let config = GalleryConfig {
            providers: vec![],
            pick_max_attempts: 1,
            ..Default::default()
        };
        let pick = pick_of_the_day(&config).await.expect("never errors");
        assert!(pick.is_none());
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_pick_of_the_day() {
        let config = GalleryConfig::default();
        let pick = pick_of_the_day(&config).await.expect("should not error");
        if let Some(record) = pick {
            assert!(!record.thumbnail_url.is_empty());
            assert!(record.id.contains(':'));
        }
    }
}
