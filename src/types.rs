//! Core types for artwork records and catalog provider identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single artwork record, unified across catalog providers.
///
/// Records are immutable after construction: adapters create them, the
/// merge/rank/sample stages consume them, and nothing persists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkRecord {
    /// Globally unique id, namespaced by provider (`"met:436535"`, `"aic:27992"`).
    pub id: String,
    /// Display title of the artwork.
    pub title: String,
    /// Display name of the artist.
    pub artist: String,
    /// Free-form display date, when the catalog supplies one.
    pub date_text: Option<String>,
    /// Resolved, directly fetchable thumbnail URL. Adapters never emit a
    /// record without one.
    pub thumbnail_url: String,
    /// Which catalog this record came from. Attribution only — dedup is
    /// content-based, never provider-based.
    pub provider: Provider,
}

/// Catalog providers that gallery-search can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// The Metropolitan Museum of Art open-access API (two-phase search).
    Met,
    /// Art Institute of Chicago API (single-phase search with IIIF images).
    Artic,
}

impl Provider {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Met => "The Met",
            Self::Artic => "Art Institute of Chicago",
        }
    }

    /// Returns the id namespace prefix for records from this provider.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Artic => "aic",
        }
    }

    /// Returns all available provider variants.
    pub fn all() -> &'static [Provider] {
        &[Self::Met, Self::Artic]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
