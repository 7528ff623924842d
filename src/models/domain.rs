use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A point on the globe in degrees
///
/// Components are not range checked; out-of-range values simply
/// produce degenerate distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.longitude, coord.latitude)
    }
}

/// Which collection a listing record comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    AuctionListing,
    NewProject,
    Property,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::AuctionListing => "auction_listing",
            ListingKind::NewProject => "new_project",
            ListingKind::Property => "property",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field names holding a record's latitude and longitude
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateFields {
    pub latitude: String,
    pub longitude: String,
}

impl CoordinateFields {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// `latitude` / `longitude`, as used by auction listings
    pub fn long_form() -> Self {
        Self::new("latitude", "longitude")
    }

    /// `lat` / `lng`, as used by new projects and properties
    pub fn short_form() -> Self {
        Self::new("lat", "lng")
    }

    pub fn for_kind(kind: ListingKind) -> Self {
        match kind {
            ListingKind::AuctionListing => Self::long_form(),
            ListingKind::NewProject | ListingKind::Property => Self::short_form(),
        }
    }
}

/// A loosely-typed listing as it comes out of storage
///
/// Serializes transparently so filtered output keeps exactly the shape
/// of the input documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingRecord(Map<String, Value>);

impl ListingRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field insertion
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// String value of a field, if it holds one
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Extract the record's coordinate using the given field names
    pub fn coordinate(&self, fields: &CoordinateFields) -> Option<Coordinate> {
        crate::core::coordinates::extract_coordinate(self, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_point_conversion() {
        let coord = Coordinate::new(1.3521, 103.8198);
        let point: geo::Point<f64> = coord.into();
        assert_eq!(point.x(), 103.8198);
        assert_eq!(point.y(), 1.3521);
        assert_eq!(Coordinate::from(point), coord);
    }

    #[test]
    fn test_fields_for_kind() {
        assert_eq!(CoordinateFields::for_kind(ListingKind::AuctionListing).latitude, "latitude");
        assert_eq!(CoordinateFields::for_kind(ListingKind::NewProject).longitude, "lng");
        assert_eq!(CoordinateFields::for_kind(ListingKind::Property).latitude, "lat");
    }

    #[test]
    fn test_record_serializes_transparently() {
        let json = r#"{"Apartment Name":"The Sail","latitude":"1.28","longitude":""}"#;
        let record: ListingRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.get_str("Apartment Name"), Some("The Sail"));
        assert!(record.contains_field("longitude"));

        let back: serde_json::Value = serde_json::to_value(&record).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(back, original);
    }
}
