//! Random segment and polygon generation for demos, fuzzing and benches.

use rand::Rng;

use crate::geometry::{Point, Segment};

pub trait LineGenerator {
    fn segment(rng: &mut impl Rng) -> Segment;
}

fn random_unit_point(rng: &mut impl Rng) -> Point {
    Point::new(rng.gen::<f64>(), rng.gen::<f64>())
}

fn random_point_in_circle(center: Point, radius: f64, rng: &mut impl Rng) -> Point {
    // Sample in polar coordinates around the origin, then recenter.
    let r = rng.gen_range(0f64..radius);
    let theta = rng.gen_range(0f64..2f64 * std::f64::consts::PI);
    Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
}

pub struct RandomUnitSquare;
pub struct ShortLines;

impl LineGenerator for RandomUnitSquare {
    fn segment(rng: &mut impl Rng) -> Segment {
        loop {
            let a = random_unit_point(rng);
            let b = random_unit_point(rng);
            if a != b {
                return Segment::new(a, b);
            }
        }
    }
}

impl LineGenerator for ShortLines {
    fn segment(rng: &mut impl Rng) -> Segment {
        loop {
            let start = random_unit_point(rng);
            let length = rng.gen_range(0.01f64..0.25);
            let end = random_point_in_circle(start, length, rng);
            if start != end {
                return Segment::new(start, end);
            }
        }
    }
}

/// Generates `n` segments using strategy `G`.
pub fn generate_segments<G: LineGenerator>(n: usize, rng: &mut impl Rng) -> Vec<Segment> {
    (0..n).map(|_| G::segment(rng)).collect()
}

/// Generates a closed convex polygon ring of `n` vertices by sampling `n`
/// angles around `center`, jittering each radius, sorting by angle, and
/// returning the directed boundary edges.
pub fn random_convex_polygon(
    n: usize,
    center: Point,
    radius: f64,
    rng: &mut impl Rng,
) -> Vec<(Point, Point)> {
    assert!(n >= 3, "a polygon needs at least 3 vertices");
    let mut angles: Vec<f64> = (0..n)
        .map(|i| {
            let base = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
            base + rng.gen_range(-0.1..0.1)
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let points: Vec<Point> = angles
        .into_iter()
        .map(|theta| {
            let r = radius * rng.gen_range(0.8..1.0);
            Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
        })
        .collect();

    (0..n).map(|i| (points[i], points[(i + 1) % n])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_unit_square_generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let segments = generate_segments::<RandomUnitSquare>(50, &mut rng);
        assert_eq!(segments.len(), 50);
    }

    #[test]
    fn short_lines_are_shorter_than_the_bounding_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let segments = generate_segments::<ShortLines>(20, &mut rng);
        for s in segments {
            let dx = s.p1.x - s.p2.x;
            let dy = s.p1.y - s.p2.y;
            assert!((dx * dx + dy * dy).sqrt() < 0.3);
        }
    }

    #[test]
    fn random_convex_polygon_has_requested_vertex_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let ring = random_convex_polygon(6, Point::new(0.0, 0.0), 10.0, &mut rng);
        assert_eq!(ring.len(), 6);
    }
}
