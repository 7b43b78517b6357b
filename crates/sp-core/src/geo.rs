//! Planar geometry: points, bounding boxes, and polygon boundaries.
//!
//! All coordinates are `f64` in a projected metric coordinate system (e.g.
//! UTM).  Reprojection from WGS-84 happens before data reaches this crate.
//!
//! # Containment rule
//!
//! [`Boundary::contains`] implements the even-odd rule with **boundary
//! exclusion**: a point lying exactly on an edge or a vertex is outside.
//! Districts that share an edge therefore never both claim a node placed
//! on that edge.

/// A point in a projected planar coordinate system (metres).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in the same unit as the coordinates.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── BBox ──────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.  Bounds are inclusive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    /// A zero-area box around a single point.
    pub fn from_point(p: Point) -> Self {
        Self { min_x: p.x, min_y: p.y, max_x: p.x, max_y: p.y }
    }

    /// Grow the box to include `p`.
    pub fn expand(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Geometric center of the box.
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }
}

// ── Boundary ──────────────────────────────────────────────────────────────────

/// A simple polygon built incrementally, point by point.
///
/// The first point starts the ring; each further point adds an edge from its
/// predecessor.  The ring is closed implicitly (last → first), so callers may
/// but need not repeat the first point.  The bounding box is maintained on
/// every push so [`center`](Self::center) is O(1).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    points: Vec<Point>,
    bbox:   Option<BBox>,
}

impl Boundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a boundary from an ordered point sequence.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut boundary = Self::new();
        for p in points {
            boundary.push(p);
        }
        boundary
    }

    /// Append a point to the ring.
    pub fn push(&mut self, p: Point) {
        match &mut self.bbox {
            Some(bbox) => bbox.expand(p),
            None => self.bbox = Some(BBox::from_point(p)),
        }
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounding box of all points, `None` while the boundary is empty.
    pub fn bbox(&self) -> Option<BBox> {
        self.bbox
    }

    /// Center of the bounding box (not the centroid).
    pub fn center(&self) -> Option<Point> {
        self.bbox.map(|b| b.center())
    }

    /// `true` if `p` lies strictly inside the polygon.
    ///
    /// Fewer than 3 points never contain anything.  Points on an edge or
    /// vertex are outside.
    pub fn contains(&self, p: Point) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        match self.bbox {
            Some(bbox) if bbox.contains(p) => {}
            _ => return false,
        }

        let n = self.points.len();
        let mut inside = false;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];

            if on_segment(a, b, p) {
                return false;
            }

            // Half-open crossing test: counts an edge iff it straddles the
            // horizontal line through `p`, so shared vertices count once.
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// `true` if `p` lies on the closed segment `a`–`b`.
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross != 0.0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}
