use crate::models::ListingRecord;

/// Case-insensitive substring match on a record's name field
///
/// The needle is matched literally. Records without a string value in
/// `field` never match.
#[inline]
pub fn matches_name(record: &ListingRecord, field: &str, needle: &str) -> bool {
    let Some(name) = record.get_str(field) else {
        return false;
    };

    name.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str) -> ListingRecord {
        ListingRecord::new().with("Apartment Name", name)
    }

    #[test]
    fn test_name_match_ignores_case() {
        assert!(matches_name(&listing("Marina Bay Suites"), "Apartment Name", "bay"));
        assert!(matches_name(&listing("Marina Bay Suites"), "Apartment Name", "MARINA"));
        assert!(!matches_name(&listing("The Sail"), "Apartment Name", "bay"));
    }

    #[test]
    fn test_name_match_is_literal() {
        assert!(!matches_name(&listing("Sail"), "Apartment Name", "S.il"));
        assert!(matches_name(&listing("Tower (A)"), "Apartment Name", "(a)"));
    }

    #[test]
    fn test_missing_name_never_matches() {
        let record = ListingRecord::new().with("Apartment Name", 42);
        assert!(!matches_name(&record, "Apartment Name", "4"));
        assert!(!matches_name(&ListingRecord::new(), "Apartment Name", ""));
    }
}
