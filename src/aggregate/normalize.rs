//! Text normalization for artwork identity resolution.
//!
//! Canonicalises artist and title strings so that the same physical work
//! listed by different catalogs (differing in case, punctuation, or
//! spacing) compares as equal.

/// Normalize a display string for identity comparison.
///
/// Applies the following transformations:
///
/// 1. Lowercase.
/// 2. Drop every character that is neither alphanumeric (Unicode-aware)
///    nor whitespace.
/// 3. Collapse whitespace runs to a single space.
/// 4. Trim leading and trailing whitespace.
///
/// Normalization is idempotent: applying it twice yields the same string.
///
/// # Examples
///
/// ```
/// use gallery_search::aggregate::normalize::normalize_text;
///
/// assert_eq!(normalize_text("  Claude   MONET! "), "claude monet");
/// ```
pub fn normalize_text(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else {
                // Whitespace survives as a separator, everything else collapses.
                ' '
            }
        })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the content-based identity key for an artwork.
///
/// Two records with the same key describe the same physical work, whatever
/// their native catalog ids say. Records missing both fields share the
/// empty `"|"` key and dedupe against each other — an accepted collision.
pub fn identity_key(artist: &str, title: &str) -> String {
    format!("{}|{}", normalize_text(artist), normalize_text(title))
}
