// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, CoordinateFields, ListingKind, ListingRecord};
pub use requests::ListingQuery;
pub use responses::SearchResult;
