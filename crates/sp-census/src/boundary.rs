//! District boundary source records.

use sp_core::Point;

/// A named polygon as delivered by a boundary source.
///
/// Points are optional because real sources are sparse: a vertex with a
/// missing coordinate is carried as `None` and skipped when the district's
/// boundary is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistrictBoundary {
    pub name:   String,
    pub points: Vec<Option<Point>>,
}

impl DistrictBoundary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new() }
    }

    /// Convenience constructor for fully populated rings.
    pub fn from_points(name: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            name:   name.into(),
            points: points.into_iter().map(Some).collect(),
        }
    }

    /// Number of points that carry a coordinate.
    pub fn valid_points(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }
}
