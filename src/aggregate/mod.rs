//! Aggregation pipeline: concurrent provider fan-out, merge, dedup, rank.
//!
//! This module fans out a keyword to the configured providers concurrently,
//! concatenates their record lists in provider order, deduplicates by a
//! normalized artist|title identity key, ranks against the query with
//! weighted fuzzy matching, and returns a truncated result set.

pub mod merge;
pub mod normalize;
pub mod rank;
pub mod search;
