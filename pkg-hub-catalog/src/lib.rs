//! Package catalog data model types and catalog file loading.
//!
//! This crate defines the immutable snapshot that the query engine in
//! `pkg-hub-core` filters and pages over. It has no knowledge of queries
//! or pagination; consumers use these types directly for display or
//! serialization.

pub mod load;
pub mod types;

pub use load::{LoadError, load_catalog, parse_catalog_json, parse_catalog_yaml};
pub use types::*;
