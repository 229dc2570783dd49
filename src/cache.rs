//! In-memory TTL cache for ranked search results.
//!
//! A cache entry is only valid for the exact search that produced it, so
//! the key carries the full ranking-relevant identity of a search: the
//! lowercased query, the provider set, and every config field that shapes
//! the ranked output (per-provider bound, rank cap, fuzzy threshold,
//! fallback boundary). Two searches differing in any of those never share
//! an entry, which keeps the rank-cap invariant intact across configs.
//!
//! Each entry carries its own expiry deadline, so callers with different
//! TTLs coexist in the shared [`moka`] cache. The daily-pick sampler
//! never touches this cache, so repeated picks stay random.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use moka::future::Cache;

use crate::config::GalleryConfig;
use crate::types::{ArtworkRecord, Provider};

/// Maximum number of cached result sets.
const MAX_CACHE_ENTRIES: u64 = 100;

/// Hard ceiling on entry lifetime, used for moka's own eviction. The
/// per-entry deadline below is what callers actually observe.
const MAX_ENTRY_TTL: Duration = Duration::from_secs(3600);

/// Process-wide result cache, shared across configs. Safe to share
/// because keys embed the config fields that matter and entries expire
/// on their own deadlines.
static CACHE: OnceLock<Cache<CacheKey, CachedEntry>> = OnceLock::new();

/// Identity of one ranked search: query plus the config fields that
/// influence the ranked output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Lowercased, trimmed query string.
    query: String,
    /// Sorted, deduplicated provider set, so `[Met, Artic]` and
    /// `[Artic, Met]` produce the same key.
    providers: Vec<Provider>,
    /// Per-provider result bound in effect for the search.
    max_per_provider: usize,
    /// Truncation cap in effect for the search.
    rank_cap: usize,
    /// Fallback trigger boundary in effect for the search.
    fallback_min_results: usize,
    /// Bit pattern of the fuzzy threshold, so the key stays `Eq + Hash`.
    fuzzy_threshold_bits: u64,
}

impl CacheKey {
    /// Build a deterministic cache key for `query` under `config`.
    pub fn new(query: &str, config: &GalleryConfig) -> Self {
        let mut providers = config.providers.clone();
        providers.sort_by_key(|p| p.prefix());
        providers.dedup();
        Self {
            query: query.trim().to_lowercase(),
            providers,
            max_per_provider: config.max_per_provider,
            rank_cap: config.rank_cap,
            fallback_min_results: config.fallback_min_results,
            fuzzy_threshold_bits: config.fuzzy_threshold.to_bits(),
        }
    }
}

/// A ranked result set plus the deadline after which it is stale.
#[derive(Debug, Clone)]
struct CachedEntry {
    records: Vec<ArtworkRecord>,
    expires_at: Instant,
}

fn shared_cache() -> &'static Cache<CacheKey, CachedEntry> {
    CACHE.get_or_init(|| {
        Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(MAX_ENTRY_TTL)
            .build()
    })
}

/// Look up cached results for the given key.
///
/// Returns `Some(records)` on a fresh hit. An entry past its own
/// deadline is evicted and reported as a miss.
pub async fn get(key: &CacheKey) -> Option<Vec<ArtworkRecord>> {
    let cache = shared_cache();
    let entry = cache.get(key).await?;
    if Instant::now() >= entry.expires_at {
        cache.invalidate(key).await;
        return None;
    }
    Some(entry.records)
}

/// Insert ranked results, valid for `ttl_seconds` from now.
pub async fn insert(key: CacheKey, records: Vec<ArtworkRecord>, ttl_seconds: u64) {
    let ttl = Duration::from_secs(ttl_seconds).min(MAX_ENTRY_TTL);
    let entry = CachedEntry {
        records,
        expires_at: Instant::now() + ttl,
    };
    shared_cache().insert(key, entry).await;
}
