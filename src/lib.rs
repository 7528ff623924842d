//! Listing Geo - radius filtering for property listings
//!
//! Filters loosely-typed listing records (properties, auction listings,
//! new projects) by great-circle distance from a query point. Storage and
//! HTTP concerns stay with the caller; this crate only decides which
//! records are close enough.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::core::{filter_by_radius, haversine_distance, retain_within_radius, ListingSearch, ProximityFilter};
pub use crate::error::ListingGeoError;
pub use crate::models::{Coordinate, CoordinateFields, ListingKind, ListingQuery, ListingRecord, SearchResult};
