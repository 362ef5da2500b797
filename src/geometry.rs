//! Points, infinite lines and segments, with epsilon-tolerant comparisons.
//!
//! Coordinates are `f64`. Equality of [`Point`] and [`Line`] is defined as
//! "within [`EPS`]", so neither type can derive `PartialEq`/`Hash` in the
//! usual way: hashing truncates each coordinate to [`HASH_SIGNIFICANT_DIGITS`]
//! significant digits so that two values considered equal also hash equal.

use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// Geometric equality tolerance used throughout the crate.
pub const EPS: f64 = 1e-8;

/// Number of significant digits coordinates are truncated to before hashing.
pub const HASH_SIGNIFICANT_DIGITS: i32 = 7;

fn truncate_to_significant_digits(value: f64, digits: i32) -> i64 {
    if value == 0.0 {
        return 0;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let shift = digits - 1 - magnitude;
    let scale = 10f64.powi(shift);
    (value * scale).round() as i64
}

#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        truncate_to_significant_digits(self.x, HASH_SIGNIFICANT_DIGITS).hash(state);
        truncate_to_significant_digits(self.y, HASH_SIGNIFICANT_DIGITS).hash(state);
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An infinite line `y = m*x + q`. Vertical lines carry `m = f64::INFINITY`
/// and `q` equal to the line's x-intercept.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub m: f64,
    pub q: f64,
}

impl Line {
    pub fn new(m: f64, q: f64) -> Self {
        Line { m, q }
    }

    pub fn is_vertical(&self) -> bool {
        self.m.is_infinite()
    }

    pub fn is_horizontal(&self) -> bool {
        self.m.abs() < EPS
    }

    pub fn from_points(p1: Point, p2: Point) -> Self {
        if (p1.x - p2.x).abs() < EPS {
            Line::new(f64::INFINITY, p1.x)
        } else {
            let m = (p2.y - p1.y) / (p2.x - p1.x);
            let q = p1.y - m * p1.x;
            Line::new(m, q)
        }
    }

    pub fn from_offset(line: Line, offset: f64) -> Self {
        Line::new(line.m, line.q + offset)
    }

    pub fn is_collinear(&self, other: &Line) -> bool {
        (self.m - other.m).abs() < EPS && (self.q - other.q).abs() < EPS
    }

    /// Intersection of two non-collinear lines. `None` if parallel.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        if self.is_collinear(other) {
            return None;
        }
        if self.is_vertical() && other.is_vertical() {
            return None;
        }
        if self.is_vertical() {
            return Some(Point::new(self.q, other.m * self.q + other.q));
        }
        if other.is_vertical() {
            return Some(Point::new(other.q, self.m * other.q + self.q));
        }
        if (self.m - other.m).abs() < EPS {
            return None;
        }
        let x = (other.q - self.q) / (self.m - other.m);
        let y = self.m * x + self.q;
        Some(Point::new(x, y))
    }

    /// x-coordinate at which this line crosses the given horizontal line.
    /// Used by the sweep status to key segments against the sweep line.
    pub fn x_at(&self, sweep_line: &Line) -> Option<f64> {
        self.intersect(sweep_line).map(|p| p.x)
    }
}

/// An unordered pair of endpoints, with an optional external identifier and
/// a derived supporting [`Line`].
#[derive(Debug, Clone)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
    pub id: Option<String>,
    line: Line,
}

impl Segment {
    /// Builds a new segment. Panics if `p1 == p2`: producers are expected to
    /// reject degenerate zero-length segments before constructing one.
    pub fn new(p1: Point, p2: Point) -> Self {
        assert!(p1 != p2, "degenerate zero-length segment");
        let line = Line::from_points(p1, p2);
        Segment { p1, p2, id: None, line }
    }

    pub fn with_id(p1: Point, p2: Point, id: impl Into<String>) -> Self {
        let mut s = Segment::new(p1, p2);
        s.id = Some(id.into());
        s
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn is_vertical(&self) -> bool {
        self.line.is_vertical()
    }

    pub fn is_horizontal(&self) -> bool {
        (self.p1.y - self.p2.y).abs() < EPS
    }

    /// Endpoint with larger y first; ties broken by smaller x first.
    pub fn order_by_y(&self) -> (Point, Point) {
        if self.p1.y > self.p2.y + EPS {
            (self.p1, self.p2)
        } else if self.p2.y > self.p1.y + EPS {
            (self.p2, self.p1)
        } else if self.p1.x < self.p2.x {
            (self.p1, self.p2)
        } else {
            (self.p2, self.p1)
        }
    }

    /// Endpoint with smaller x first; ties broken by larger y first.
    pub fn order_by_x(&self) -> (Point, Point) {
        if self.p1.x < self.p2.x - EPS {
            (self.p1, self.p2)
        } else if self.p2.x < self.p1.x - EPS {
            (self.p2, self.p1)
        } else if self.p1.y > self.p2.y {
            (self.p1, self.p2)
        } else {
            (self.p2, self.p1)
        }
    }

    /// Whether `point` lies on the closed segment, including endpoints.
    pub fn contains(&self, point: Point) -> bool {
        if point == self.p1 || point == self.p2 {
            return true;
        }
        let cross = (point.y - self.p1.y) * (self.p2.x - self.p1.x)
            - (point.x - self.p1.x) * (self.p2.y - self.p1.y);
        if cross.abs() > EPS {
            return false;
        }
        let dot = (point.x - self.p1.x) * (self.p2.x - self.p1.x)
            + (point.y - self.p1.y) * (self.p2.y - self.p1.y);
        if dot < 0.0 {
            return false;
        }
        let squared_length = (self.p2.x - self.p1.x).powi(2) + (self.p2.y - self.p1.y).powi(2);
        dot <= squared_length + EPS
    }

    /// Whether the two segments are collinear and share at least one point
    /// (either endpoint lying on the other).
    pub fn is_collinear(&self, other: &Segment) -> bool {
        if !self.line.is_collinear(&other.line) {
            return false;
        }
        self.contains(other.p1)
            || self.contains(other.p2)
            || other.contains(self.p1)
            || other.contains(self.p2)
    }

    pub fn shared_endpoint(&self, other: &Segment) -> Option<Point> {
        for a in [self.p1, self.p2] {
            for b in [other.p1, other.p2] {
                if a == b {
                    return Some(a);
                }
            }
        }
        None
    }

    /// Unique intersection point, if any. Returns `Ok(None)` when the
    /// segments do not cross. Fails with [`Error::Collinearity`] when the
    /// segments are collinear without a shared endpoint.
    pub fn intersection(&self, other: &Segment) -> Result<Option<Point>> {
        if self.is_collinear(other) {
            return match self.shared_endpoint(other) {
                Some(p) => Ok(Some(p)),
                None => Err(Error::Collinearity(format!("{self} and {other}"))),
            };
        }
        let Some(candidate) = self.line.intersect(&other.line) else {
            return Ok(None);
        };
        if self.contains(candidate) && other.contains(candidate) {
            Ok(Some(candidate))
        } else {
            Ok(None)
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Segment({}, {})", self.p1, self.p2)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent hash: combine both endpoint hashes commutatively.
        let mut h1 = std::collections::hash_map::DefaultHasher::new();
        self.p1.hash(&mut h1);
        let h1 = h1.finish();
        let mut h2 = std::collections::hash_map::DefaultHasher::new();
        self.p2.hash(&mut h2);
        let h2 = h2.finish();
        (h1 ^ h2).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_equality_within_epsilon() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(1.0 + EPS / 2.0, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn line_from_vertical_points() {
        let line = Line::from_points(Point::new(3.0, 0.0), Point::new(3.0, 5.0));
        assert!(line.is_vertical());
        assert!((line.q - 3.0).abs() < EPS);
    }

    #[test]
    fn segment_order_by_y_picks_larger_y_first() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 5.0));
        let (upper, lower) = s.order_by_y();
        assert_eq!(upper, Point::new(1.0, 5.0));
        assert_eq!(lower, Point::new(0.0, 0.0));
    }

    #[test]
    fn segment_contains_midpoint() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(s.contains(Point::new(5.0, 0.0)));
        assert!(!s.contains(Point::new(5.0, 1.0)));
        assert!(!s.contains(Point::new(11.0, 0.0)));
    }

    #[test]
    fn crossing_segments_intersect_at_midpoint() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = Segment::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        let p = a.intersection(&b).unwrap().unwrap();
        assert_eq!(p, Point::new(5.0, 5.0));
    }

    #[test]
    fn collinear_without_shared_endpoint_errors() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let b = Segment::new(Point::new(2.0, 0.0), Point::new(3.0, 0.0));
        assert!(a.intersection(&b).is_err());
    }

    #[test]
    fn collinear_sharing_endpoint_returns_that_point() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let b = Segment::new(Point::new(1.0, 0.0), Point::new(2.0, 0.0));
        let p = a.intersection(&b).unwrap().unwrap();
        assert_eq!(p, Point::new(1.0, 0.0));
    }
}
