//! Weighted fuzzy ranking with a substring fallback.
//!
//! The primary pass scores every record against the query with an
//! edit-distance-tolerant matcher over two weighted fields — artist (0.7)
//! and title (0.3) — and keeps records whose score clears the configured
//! threshold, ordered best match first. When the primary pass under-returns,
//! a case-insensitive substring pass appends any record containing the raw
//! query that the fuzzy pass missed. Both passes are pure functions of
//! their inputs, so ranking is deterministic for a fixed record list.

use std::collections::HashSet;

use crate::config::GalleryConfig;
use crate::types::ArtworkRecord;

use super::normalize::normalize_text;

/// Weight of the artist field in the combined score.
const ARTIST_WEIGHT: f64 = 0.7;
/// Weight of the title field in the combined score.
const TITLE_WEIGHT: f64 = 0.3;
/// Minimum query length (in chars) for the fuzzy pass. The substring
/// fallback deliberately has no minimum.
const MIN_MATCH_CHARS: usize = 2;

/// Rank records against a free-text query.
///
/// Uses `config.fuzzy_threshold` for the primary pass,
/// `config.fallback_min_results` as the fallback trigger boundary, and
/// truncates to `config.rank_cap`. Returns an empty list, not an error,
/// when nothing matches.
pub fn rank(records: &[ArtworkRecord], query: &str, config: &GalleryConfig) -> Vec<ArtworkRecord> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let query_norm = normalize_text(trimmed);

    // Primary fuzzy pass: (score, index) pairs, kept only when a weighted
    // field clears the threshold.
    let mut scored: Vec<(f64, usize)> = Vec::new();
    if query_norm.chars().count() >= MIN_MATCH_CHARS {
        for (index, record) in records.iter().enumerate() {
            if let Some(score) = record_score(&query_norm, record, config.fuzzy_threshold) {
                scored.push((score, index));
            }
        }
    }

    // Stable sort ascending: best match first, ties keep merged order.
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranked: Vec<ArtworkRecord> =
        scored.iter().map(|&(_, index)| records[index].clone()).collect();

    // Fallback substring pass, appended after the fuzzy ordering.
    if ranked.len() < config.fallback_min_results {
        let query_lower = trimmed.to_lowercase();
        let seen: HashSet<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        let fallback: Vec<ArtworkRecord> = records
            .iter()
            .filter(|record| {
                !seen.contains(record.id.as_str())
                    && (record.artist.to_lowercase().contains(&query_lower)
                        || record.title.to_lowercase().contains(&query_lower))
            })
            .cloned()
            .collect();
        if !fallback.is_empty() {
            tracing::debug!(count = fallback.len(), "substring fallback appended records");
            ranked.extend(fallback);
        }
    }

    ranked.truncate(config.rank_cap);
    ranked
}

/// Combined weighted score for a record, or `None` if no field matches.
///
/// A record matches when at least one weighted field scores at or below
/// the threshold; the combined score is the weighted mean over the fields
/// that matched.
fn record_score(query_norm: &str, record: &ArtworkRecord, threshold: f64) -> Option<f64> {
    let artist = field_score(query_norm, &record.artist);
    let title = field_score(query_norm, &record.title);

    let mut weight_sum = 0.0;
    let mut score_sum = 0.0;
    if artist <= threshold {
        weight_sum += ARTIST_WEIGHT;
        score_sum += ARTIST_WEIGHT * artist;
    }
    if title <= threshold {
        weight_sum += TITLE_WEIGHT;
        score_sum += TITLE_WEIGHT * title;
    }

    if weight_sum == 0.0 {
        None
    } else {
        Some(score_sum / weight_sum)
    }
}

/// Fuzzy score of a query against one field, on a 0–1 scale where 0 is a
/// perfect match.
///
/// Location-agnostic: the query is compared against the whole normalized
/// field and against each of its whitespace tokens, and the best
/// similarity wins. A query matching any token anywhere in the field
/// therefore counts in full.
fn field_score(query_norm: &str, field: &str) -> f64 {
    let field_norm = normalize_text(field);
    if field_norm.is_empty() {
        return 1.0;
    }

    let mut best = strsim::normalized_levenshtein(query_norm, &field_norm);
    for token in field_norm.split_whitespace() {
        let similarity = strsim::normalized_levenshtein(query_norm, token);
        if similarity > best {
            best = similarity;
        }
    }
    1.0 - best
}
