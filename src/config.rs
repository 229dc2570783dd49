//! Search configuration with sensible defaults.
//!
//! [`GalleryConfig`] controls which providers are queried, timeouts, ranking
//! parameters, caching, and the daily-pick retry budget. The defaults match
//! the behaviour the gallery UI expects.

use crate::error::GalleryError;
use crate::types::Provider;

/// Configuration for artwork search and daily-pick operations.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Which catalog providers to query. Queried concurrently; the merge
    /// stage concatenates results in this order, so earlier providers win
    /// dedup collisions.
    pub providers: Vec<Provider>,
    /// Maximum records requested from each provider during a search.
    pub max_per_provider: usize,
    /// Maximum records returned after ranking.
    pub rank_cap: usize,
    /// Per-request HTTP timeout in milliseconds.
    pub timeout_ms: u64,
    /// Fuzzy match-quality threshold on a 0–1 scale where 0 is a perfect
    /// match. Lower is stricter.
    pub fuzzy_threshold: f64,
    /// If the fuzzy pass yields fewer results than this, the substring
    /// fallback pass runs.
    pub fallback_min_results: usize,
    /// How long to cache ranked results in seconds. Set to 0 to disable caching.
    pub cache_ttl_seconds: u64,
    /// Retry budget for the daily-pick sampler.
    pub pick_max_attempts: usize,
    /// Maximum records requested from each provider during a daily-pick attempt.
    pub pick_max_per_provider: usize,
    /// Custom User-Agent string. If `None`, a crate-default UA is used.
    pub user_agent: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            providers: vec![Provider::Met, Provider::Artic],
            max_per_provider: 30,
            rank_cap: 60,
            timeout_ms: 15_000,
            fuzzy_threshold: 0.42,
            fallback_min_results: 6,
            cache_ttl_seconds: 600,
            pick_max_attempts: 3,
            pick_max_per_provider: 50,
            user_agent: None,
        }
    }
}

impl GalleryConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_per_provider`, `rank_cap`, `timeout_ms`, `pick_max_attempts`
    ///   and `pick_max_per_provider` must all be greater than 0
    /// - `providers` must not be empty
    /// - `fuzzy_threshold` must be in `(0, 1]`
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.max_per_provider == 0 {
            return Err(GalleryError::Config(
                "max_per_provider must be greater than 0".into(),
            ));
        }
        if self.rank_cap == 0 {
            return Err(GalleryError::Config("rank_cap must be greater than 0".into()));
        }
        if self.timeout_ms == 0 {
            return Err(GalleryError::Config("timeout_ms must be greater than 0".into()));
        }
        if self.providers.is_empty() {
            return Err(GalleryError::Config(
                "at least one provider must be enabled".into(),
            ));
        }
        if !(self.fuzzy_threshold > 0.0 && self.fuzzy_threshold <= 1.0) {
            return Err(GalleryError::Config(
                "fuzzy_threshold must be in (0, 1]".into(),
            ));
        }
        if self.pick_max_attempts == 0 {
            return Err(GalleryError::Config(
                "pick_max_attempts must be greater than 0".into(),
            ));
        }
        if self.pick_max_per_provider == 0 {
            return Err(GalleryError::Config(
                "pick_max_per_provider must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
