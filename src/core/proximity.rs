use crate::core::distance::distance_between;
use crate::models::Coordinate;

/// Radius test around a fixed center
///
/// Stateless apart from its parameters, so one filter can be shared
/// freely across threads while each caller scans its own records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityFilter {
    center: Coordinate,
    radius_m: f64,
}

impl ProximityFilter {
    pub fn new(center: Coordinate, radius_m: f64) -> Self {
        Self { center, radius_m }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Distance from the center to `point` in meters
    #[inline]
    pub fn distance_to(&self, point: Coordinate) -> f64 {
        distance_between(self.center, point)
    }

    /// Whether `point` lies within the radius
    ///
    /// NaN distances compare false and are never contained.
    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        self.distance_to(point) <= self.radius_m
    }

    /// Whether a located record passes; unlocated records never do
    #[inline]
    pub fn admits(&self, point: Option<Coordinate>) -> bool {
        point.is_some_and(|p| self.contains(p))
    }

    /// Borrowing filter, see [`filter_by_radius`]
    pub fn filter<'a, R, F>(&self, records: &'a [R], locate: F) -> Vec<&'a R>
    where
        F: Fn(&R) -> Option<Coordinate>,
    {
        records.iter().filter(|r| self.admits(locate(*r))).collect()
    }

    /// Owning filter, see [`retain_within_radius`]
    pub fn retain<R, F>(&self, records: Vec<R>, locate: F) -> Vec<R>
    where
        F: Fn(&R) -> Option<Coordinate>,
    {
        records.into_iter().filter(|r| self.admits(locate(r))).collect()
    }
}

/// Select the records within `radius_m` meters of `center`
///
/// `locate` extracts each record's coordinate; records it cannot locate
/// are dropped. The result keeps input order.
pub fn filter_by_radius<'a, R, F>(
    records: &'a [R],
    center: Coordinate,
    radius_m: f64,
    locate: F,
) -> Vec<&'a R>
where
    F: Fn(&R) -> Option<Coordinate>,
{
    ProximityFilter::new(center, radius_m).filter(records, locate)
}

/// Like [`filter_by_radius`], but takes ownership of the records
pub fn retain_within_radius<R, F>(
    records: Vec<R>,
    center: Coordinate,
    radius_m: f64,
    locate: F,
) -> Vec<R>
where
    F: Fn(&R) -> Option<Coordinate>,
{
    ProximityFilter::new(center, radius_m).retain(records, locate)
}
