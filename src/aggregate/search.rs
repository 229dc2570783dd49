//! Search orchestrator: concurrent provider fan-out, merge, dedupe, rank.
//!
//! Queries all configured providers concurrently, absorbs per-provider
//! failures, merges and deduplicates the record lists in provider order,
//! ranks against the query, and truncates to the configured cap.

use crate::cache;
use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::provider::ProviderAdapter;
use crate::providers::{ArticProvider, MetProvider};
use crate::types::{ArtworkRecord, Provider};

use super::merge::merge_records;
use super::rank::rank;

/// Orchestrate a concurrent search across all configured providers.
///
/// # Pipeline
///
/// 1. Return cached results when the TTL cache holds this query
/// 2. Fan out the keyword to every provider in `config.providers`
///    concurrently with [`futures::future::join_all`]
/// 3. Log per-provider failures at warn level; a failed provider
///    contributes an empty list
/// 4. Merge the lists in provider order, deduplicating by identity key
///    (first-seen-wins, so earlier providers survive collisions)
/// 5. Rank against the query and truncate to `config.rank_cap`
///
/// # Errors
///
/// Returns [`GalleryError::AllProvidersFailed`] only if **every** provider
/// fails. A provider returning zero records is a normal outcome and never
/// an error.
pub async fn orchestrate_search(
    query: &str,
    config: &GalleryConfig,
) -> Result<Vec<ArtworkRecord>, GalleryError> {
    let cache_key = cache::CacheKey::new(query, config);
    if config.cache_ttl_seconds > 0 {
        if let Some(cached) = cache::get(&cache_key).await {
            tracing::debug!(query, count = cached.len(), "ranked results served from cache");
            return Ok(cached);
        }
    }

    let outcomes = fan_out(query, config.max_per_provider, config).await;

    let mut lists: Vec<Vec<ArtworkRecord>> = Vec::with_capacity(outcomes.len());
    let mut errors: Vec<String> = Vec::new();

    for (provider, outcome) in outcomes {
        match outcome {
            Ok(records) => {
                tracing::debug!(%provider, count = records.len(), "provider returned records");
                lists.push(records);
            }
            Err(err) => {
                tracing::warn!(%provider, error = %err, "provider query failed");
                errors.push(format!("{}: {err}", provider.prefix()));
                lists.push(Vec::new());
            }
        }
    }

    // Only a full wipeout is an error; partial failure degrades gracefully.
    if !errors.is_empty() && errors.len() == config.providers.len() {
        return Err(GalleryError::AllProvidersFailed(errors.join("; ")));
    }

    let merged = merge_records(lists);
    tracing::debug!(count = merged.len(), "records after merge and dedupe");

    let ranked = rank(&merged, query, config);
    tracing::debug!(count = ranked.len(), "records after ranking");

    if config.cache_ttl_seconds > 0 {
        cache::insert(cache_key, ranked.clone(), config.cache_ttl_seconds).await;
    }

    Ok(ranked)
}

/// Query every configured provider concurrently, pairing each outcome with
/// its provider. join_all waits for all fan-out branches to settle, so one
/// slow or failing provider never cancels its sibling.
pub(crate) async fn fan_out(
    keyword: &str,
    max_per_provider: usize,
    config: &GalleryConfig,
) -> Vec<(Provider, Result<Vec<ArtworkRecord>, GalleryError>)> {
    let futures: Vec<_> = config
        .providers
        .iter()
        .map(|provider| {
            let keyword = keyword.to_string();
            let config = config.clone();
            let provider = *provider;
            async move {
                let result = query_provider(provider, &keyword, max_per_provider, &config).await;
                (provider, result)
            }
        })
        .collect();

    futures::future::join_all(futures).await
}

/// Query a single provider, dispatching to the concrete adapter.
async fn query_provider(
    provider: Provider,
    keyword: &str,
    max_results: usize,
    config: &GalleryConfig,
) -> Result<Vec<ArtworkRecord>, GalleryError> {
    match provider {
        Provider::Met => MetProvider.search(keyword, max_results, config).await,
        Provider::Artic => ArticProvider.search(keyword, max_results, config).await,
    }
}
