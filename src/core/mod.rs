// Core algorithm exports
pub mod coordinates;
pub mod distance;
pub mod filters;
pub mod prefilter;
pub mod proximity;
pub mod search;

pub use coordinates::{extract_coordinate, parse_degrees, parse_float_prefix};
pub use distance::{distance_between, haversine_distance, EARTH_RADIUS_M};
pub use filters::matches_name;
pub use prefilter::{existence_filter_document, has_coordinate_fields};
pub use proximity::{filter_by_radius, retain_within_radius, ProximityFilter};
pub use search::ListingSearch;
