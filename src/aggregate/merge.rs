//! Record merging with first-seen-wins deduplication.
//!
//! Concatenates per-provider lists in call order, then keeps the first
//! occurrence of each identity key. Since lists arrive in provider order,
//! the earlier provider's record survives a collision.

use std::collections::HashSet;

use crate::types::ArtworkRecord;

use super::normalize::identity_key;

/// Merge per-provider record lists, dropping identity-key duplicates.
///
/// Output preserves first-seen order; no two output records share an
/// identity key; output length never exceeds input total length. Merging
/// is idempotent — merging the output with an empty list reproduces it.
pub fn merge_records<I>(lists: I) -> Vec<ArtworkRecord>
where
    I: IntoIterator<Item = Vec<ArtworkRecord>>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<ArtworkRecord> = Vec::new();

    for list in lists {
        for record in list {
            let key = identity_key(&record.artist, &record.title);
            if seen.insert(key) {
                out.push(record);
            }
        }
    }

    out
}
