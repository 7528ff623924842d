use serde_json::{json, Map, Value};
use crate::models::{CoordinateFields, ListingRecord};

/// Cheap coordinate presence check
///
/// Both fields must exist and neither may be an empty string. This is
/// the same condition a document store evaluates for
/// [`existence_filter_document`], so callers that push it down to
/// storage and callers that run it in-process see identical results.
/// Passing it says nothing about whether the values parse.
#[inline]
pub fn has_coordinate_fields(record: &ListingRecord, fields: &CoordinateFields) -> bool {
    field_present(record, &fields.latitude) && field_present(record, &fields.longitude)
}

fn field_present(record: &ListingRecord, field: &str) -> bool {
    record.contains_field(field) && record.get_str(field).map_or(true, |s| !s.is_empty())
}

/// The existence check as a storage filter document
///
/// ```json
/// { "lat": { "$exists": true, "$ne": "" }, "lng": { "$exists": true, "$ne": "" } }
/// ```
pub fn existence_filter_document(fields: &CoordinateFields) -> Value {
    let mut doc = Map::new();
    doc.insert(fields.latitude.clone(), json!({ "$exists": true, "$ne": "" }));
    doc.insert(fields.longitude.clone(), json!({ "$exists": true, "$ne": "" }));
    Value::Object(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_check() {
        let fields = CoordinateFields::long_form();

        let full = ListingRecord::new().with("latitude", "1.3").with("longitude", "103.8");
        let empty = ListingRecord::new().with("latitude", "").with("longitude", "103.8");
        let missing = ListingRecord::new().with("latitude", "1.3");
        let garbage = ListingRecord::new().with("latitude", "n/a").with("longitude", "n/a");

        assert!(has_coordinate_fields(&full, &fields));
        assert!(!has_coordinate_fields(&empty, &fields));
        assert!(!has_coordinate_fields(&missing, &fields));
        // Present but unparseable still passes the cheap check
        assert!(has_coordinate_fields(&garbage, &fields));
    }

    #[test]
    fn test_filter_document_shape() {
        let doc = existence_filter_document(&CoordinateFields::short_form());

        assert_eq!(doc["lat"]["$exists"], json!(true));
        assert_eq!(doc["lat"]["$ne"], json!(""));
        assert_eq!(doc["lng"]["$exists"], json!(true));
        assert!(doc.get("latitude").is_none());
    }
}
