use serde::{Deserialize, Serialize};
use crate::core::{parse_float_prefix, ProximityFilter};
use crate::error::ListingGeoError;
use crate::models::Coordinate;

/// Raw listing query parameters, as a web framework hands them over
///
/// All values stay strings until `radius_filter` decides whether a
/// radius search was actually requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
    #[serde(default)]
    pub radius: Option<String>,
    #[serde(default)]
    #[serde(alias = "apartment_name", rename = "apartmentName")]
    pub apartment_name: Option<String>,
}

impl ListingQuery {
    /// Radius query around a center, in meters
    pub fn within(center: Coordinate, radius_m: f64) -> Self {
        Self {
            lat: Some(center.latitude.to_string()),
            lng: Some(center.longitude.to_string()),
            radius: Some(radius_m.to_string()),
            apartment_name: None,
        }
    }

    /// Parse a URL query string such as `lat=1.35&lng=103.8&radius=5000`
    ///
    /// Unknown keys are ignored. A leading `?` is allowed.
    pub fn from_query_string(query: &str) -> Result<Self, ListingGeoError> {
        let mut parsed = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            let value = decode_component(value)?;

            match key.as_str() {
                "lat" => parsed.lat = Some(value),
                "lng" => parsed.lng = Some(value),
                "radius" => parsed.radius = Some(value),
                "apartmentName" | "apartment_name" => parsed.apartment_name = Some(value),
                other => tracing::trace!("Ignoring unknown query parameter: {}", other),
            }
        }

        Ok(parsed)
    }

    /// Name substring to match, if one was given
    pub fn name_filter(&self) -> Option<&str> {
        self.apartment_name.as_deref().filter(|n| !n.is_empty())
    }

    /// Build the radius filter, or `None` if no usable radius search was requested
    ///
    /// All three of `lat`, `lng` and `radius` must be present and start
    /// with a number (`radius=5000m` reads as 5000). The center must be
    /// finite; the radius may be `Infinity` or negative.
    pub fn radius_filter(&self) -> Option<ProximityFilter> {
        let lat = parse_param(self.lat.as_deref())?;
        let lng = parse_param(self.lng.as_deref())?;
        let radius = parse_param(self.radius.as_deref())?;

        let center = Coordinate::new(lat, lng);
        if !center.is_finite() {
            return None;
        }

        Some(ProximityFilter::new(center, radius))
    }
}

fn parse_param(value: Option<&str>) -> Option<f64> {
    parse_float_prefix(value?)
}

fn decode_component(raw: &str) -> Result<String, ListingGeoError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|e| ListingGeoError::InvalidQuery(format!("{}: {}", raw, e)))
}
