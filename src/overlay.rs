//! Planar subdivision overlay: merges two DCELs, cuts their edges at every
//! mutual intersection, and reassigns faces.

use crate::dcel::Dcel;
use crate::error::{Error, Result};
use crate::geometry::{Point, Segment};
use crate::sweep::sweep_line_intersection;

/// Computes the overlay of `a` and `b`: the subdivision whose edges are the
/// maximal portions of the inputs' edges not crossed by another input edge.
///
/// Internally this extracts the canonical segment set of both inputs,
/// invokes the sweep line to find every mutual intersection, cuts each
/// segment at its recorded split points, and rebuilds a DCEL from the fully
/// cut edge set. Reassigning faces from a flat edge list is exactly the
/// rotational-sort-then-walk procedure `Dcel::new` already performs (see
/// §4.5 phase 3-4 in the design notes), so this reuses it rather than
/// re-deriving the same rule as bespoke edge-splicing surgery.
pub fn overlay(a: &Dcel, b: &Dcel) -> Result<Dcel> {
    if a.prefix == b.prefix {
        return Err(Error::Dcel(format!(
            "cannot overlay two subdivisions sharing the prefix '{}'",
            a.prefix
        )));
    }

    let segments = canonical_segments(a, b);
    if segments.is_empty() {
        return Err(Error::EmptyInput);
    }

    let (_intersections, splitted) = sweep_line_intersection(&segments)?;

    let mut directed_edges: Vec<(Point, Point)> = Vec::new();
    for seg in &segments {
        // TODO: when an intersection point coincides with an endpoint of
        // segments belonging to only one of the two owning subdivisions
        // (not both), the source this was ported from left the handling of
        // that case unfinished. The fallback below (treat every split point
        // uniformly regardless of which subdivision "owns" it) is not
        // guaranteed to match whatever the intended behaviour was.
        let points = splitted.get(seg).cloned().unwrap_or_else(|| {
            let (upper, lower) = seg.order_by_y();
            vec![upper, lower]
        });
        for window in points.windows(2) {
            let (p1, p2) = (window[0], window[1]);
            if p1 == p2 {
                continue;
            }
            directed_edges.push((p1, p2));
        }
    }

    Dcel::new(vec![directed_edges], "overlay")
}

/// One [`Segment`] per undirected edge across both subdivisions, tagged
/// with its owning half-edge id, deduplicated by endpoint set.
fn canonical_segments(a: &Dcel, b: &Dcel) -> Vec<Segment> {
    let mut seen: Vec<Segment> = Vec::new();
    for dcel in [a, b] {
        for he in dcel.edges.values() {
            let origin = dcel.vertices[&he.origin].point;
            let dest = dcel.destination(&he.id);
            if origin == dest {
                continue;
            }
            let seg = Segment::with_id(origin, dest, he.id.0.clone());
            if !seen.contains(&seg) {
                seen.push(seg);
            }
        }
    }
    seen
}
