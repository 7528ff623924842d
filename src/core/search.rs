use crate::config::{FieldSettings, Settings};
use crate::core::{
    filters::matches_name,
    prefilter::has_coordinate_fields,
    proximity::ProximityFilter,
};
use crate::error::ListingGeoError;
use crate::models::{CoordinateFields, ListingKind, ListingQuery, ListingRecord, SearchResult};

/// Field layout resolved for one listing kind
#[derive(Debug, Clone, PartialEq)]
struct KindLayout {
    coordinates: CoordinateFields,
    name: Option<String>,
}

impl From<&FieldSettings> for KindLayout {
    fn from(fields: &FieldSettings) -> Self {
        Self {
            coordinates: fields.coordinate_fields(),
            name: fields.name.clone(),
        }
    }
}

/// Listing search orchestrator
///
/// # Pipeline Stages
/// 1. Name filter (when the query names one and the kind has a name field)
/// 2. Coordinate existence prefilter
/// 3. Exact Haversine radius filter
///
/// Stages 2 and 3 only run when the query carries a usable center and
/// radius. Otherwise every record that survived stage 1 is returned.
#[derive(Debug, Clone)]
pub struct ListingSearch {
    auction: KindLayout,
    new_project: KindLayout,
    property: KindLayout,
}

impl ListingSearch {
    pub fn new(settings: &Settings) -> Self {
        let listings = &settings.listings;
        Self {
            auction: KindLayout::from(listings.for_kind(ListingKind::AuctionListing)),
            new_project: KindLayout::from(listings.for_kind(ListingKind::NewProject)),
            property: KindLayout::from(listings.for_kind(ListingKind::Property)),
        }
    }

    pub fn with_default_fields() -> Self {
        Self::new(&Settings::default())
    }

    fn layout(&self, kind: ListingKind) -> &KindLayout {
        match kind {
            ListingKind::AuctionListing => &self.auction,
            ListingKind::NewProject => &self.new_project,
            ListingKind::Property => &self.property,
        }
    }

    /// Coordinate field names used for `kind`
    pub fn coordinate_fields(&self, kind: ListingKind) -> &CoordinateFields {
        &self.layout(kind).coordinates
    }

    /// Run a query over records of one kind
    ///
    /// # Arguments
    /// * `kind` - Which collection the records come from
    /// * `records` - Candidate records, typically straight from storage
    /// * `query` - Raw query parameters
    ///
    /// # Returns
    /// SearchResult whose listings are a subsequence of `records`
    pub fn search(
        &self,
        kind: ListingKind,
        records: Vec<ListingRecord>,
        query: &ListingQuery,
    ) -> SearchResult {
        let total_candidates = records.len();
        let layout = self.layout(kind);

        let mut listings = records;

        if let Some(needle) = query.name_filter() {
            match &layout.name {
                Some(field) => listings.retain(|r| matches_name(r, field, needle)),
                None => tracing::debug!("Ignoring name filter for {}: no name field configured", kind),
            }
        }

        let radius_filter = query.radius_filter();
        if let Some(filter) = &radius_filter {
            listings = self.apply_radius(filter, &layout.coordinates, listings);
        } else if query.lat.is_some() || query.lng.is_some() || query.radius.is_some() {
            tracing::debug!(
                "Incomplete or unparseable radius query for {} (lat={:?}, lng={:?}, radius={:?}), skipping distance filter",
                kind,
                query.lat,
                query.lng,
                query.radius
            );
        }

        tracing::info!(
            "Returning {} {} listings (from {} candidates, radius applied: {})",
            listings.len(),
            kind,
            total_candidates,
            radius_filter.is_some()
        );

        SearchResult {
            listings,
            total_candidates,
            radius_applied: radius_filter.is_some(),
        }
    }

    /// Decode a JSON array of records and run a query over it
    pub fn search_json(
        &self,
        kind: ListingKind,
        json: &str,
        query: &ListingQuery,
    ) -> Result<SearchResult, ListingGeoError> {
        let records: Vec<ListingRecord> = serde_json::from_str(json)?;
        Ok(self.search(kind, records, query))
    }

    fn apply_radius(
        &self,
        filter: &ProximityFilter,
        fields: &CoordinateFields,
        records: Vec<ListingRecord>,
    ) -> Vec<ListingRecord> {
        let present: Vec<ListingRecord> = records
            .into_iter()
            .filter(|r| has_coordinate_fields(r, fields))
            .collect();

        tracing::debug!(
            "{} records carry {}/{}; measuring against ({}, {}) within {}m",
            present.len(),
            fields.latitude,
            fields.longitude,
            filter.center().latitude,
            filter.center().longitude,
            filter.radius_m()
        );

        filter.retain(present, |r| r.coordinate(fields))
    }
}

impl Default for ListingSearch {
    fn default() -> Self {
        Self::with_default_fields()
    }
}
