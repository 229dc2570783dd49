//! Catalog provider implementations.
//!
//! Each module provides a struct implementing [`crate::provider::ProviderAdapter`]
//! that queries a specific museum API and maps its JSON wire format to
//! [`crate::types::ArtworkRecord`].

pub mod artic;
pub mod met;

pub use artic::ArticProvider;
pub use met::MetProvider;
