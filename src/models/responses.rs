use serde::{Deserialize, Serialize};
use crate::models::domain::ListingRecord;

/// Outcome of a listing search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub listings: Vec<ListingRecord>,
    /// Records handed in before any filtering
    pub total_candidates: usize,
    /// Whether a radius filter was requested and applied
    pub radius_applied: bool,
}
