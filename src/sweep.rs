//! Bentley–Ottmann sweep-line segment intersection, plus the O(n²) naive
//! reference used to cross-check it in tests.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::event_queue::{EventPoint, EventQueue, EventType};
use crate::geometry::{Line, Point, Segment, EPS};
use crate::status::Status;

pub type IntersectionMap = HashMap<Point, Vec<Segment>>;
pub type SplitMap = HashMap<Segment, Vec<Point>>;

fn push_unique(points: &mut Vec<Point>, p: Point) {
    if !points.contains(&p) {
        points.push(p);
    }
}

fn push_unique_segment(segments: &mut Vec<Segment>, s: &Segment) {
    if !segments.contains(s) {
        segments.push(s.clone());
    }
}

/// Runs the sweep line over `segments`, returning every point at which two
/// or more segments meet and, for every segment touched by such a point, its
/// full ordered subdivision (including its own endpoints).
pub fn sweep_line_intersection(segments: &[Segment]) -> Result<(IntersectionMap, SplitMap)> {
    if segments.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut queue = EventQueue::new();
    for seg in segments {
        let (upper, lower) = seg.order_by_y();
        queue.schedule(upper, EventType::Start, vec![seg.clone()]);
        queue.schedule(lower, EventType::End, vec![seg.clone()]);
    }

    let mut status = Status::new();
    let mut intersections: IntersectionMap = HashMap::new();
    let mut interior: SplitMap = HashMap::new();

    while let Some(event) = queue.pop() {
        let p = event.point;
        let sweep_y = p.y;

        let u: Vec<Segment> = event
            .segments
            .iter()
            .filter(|s| s.order_by_y().0 == p)
            .cloned()
            .collect();

        let l: Vec<Segment> = status
            .iter()
            .filter(|s| s.order_by_y().1 == p)
            .cloned()
            .collect();

        let c: Vec<Segment> = status
            .iter()
            .filter(|s| {
                let (up, lo) = s.order_by_y();
                up != p && lo != p && s.contains(p)
            })
            .cloned()
            .collect();

        let mut all: Vec<Segment> = Vec::new();
        for group in [&u, &l, &c] {
            for s in group {
                push_unique_segment(&mut all, s);
            }
        }

        reject_bad_collinearity(&all)?;

        handle_horizontal_collinear(&all, &mut intersections, &mut interior);

        if all.len() >= 2 {
            let entry = intersections.entry(p).or_default();
            for s in &all {
                push_unique_segment(entry, s);
            }
            for s in &all {
                interior.entry(s.clone()).or_default().push(p);
            }
        }

        let mut remove_set = c.clone();
        remove_set.extend(l.iter().cloned());
        status.remove(&remove_set);

        let mut reinsert = u.clone();
        reinsert.extend(c.iter().cloned());
        let reference_line = Line::new(0.0, sweep_y - EPS);
        status.add(reinsert.clone(), reference_line);

        if reinsert.is_empty() {
            let (left, right) = status.neighbours_at(p.x);
            if let (Some(a), Some(b)) = (left, right) {
                find_new_event(a, b, sweep_y, p, &mut queue);
            }
        } else {
            let mut indices: Vec<usize> = reinsert
                .iter()
                .filter_map(|s| status.index(s))
                .collect();
            indices.sort_unstable();
            if let (Some(&left_idx), Some(&right_idx)) = (indices.first(), indices.last()) {
                let leftmost = status.iter().nth(left_idx).cloned();
                let rightmost = status.iter().nth(right_idx).cloned();
                if let Some(leftmost) = &leftmost {
                    let (left_outer, _) = status.neighbours_of(leftmost);
                    if let Some(outer) = left_outer {
                        find_new_event(outer, leftmost, sweep_y, p, &mut queue);
                    }
                }
                if let Some(rightmost) = &rightmost {
                    let (_, right_outer) = status.neighbours_of(rightmost);
                    if let Some(outer) = right_outer {
                        find_new_event(rightmost, outer, sweep_y, p, &mut queue);
                    }
                }
            }
        }
    }

    let splitted = finalize_split_map(interior);
    Ok((intersections, splitted))
}

/// Expands each segment's recorded interior points into the full ordered
/// subdivision, bookended by its own endpoints, in y-descending order (ties
/// broken by ascending x, matching the order events are processed in).
fn finalize_split_map(interior: SplitMap) -> SplitMap {
    let mut out = SplitMap::new();
    for (seg, points) in interior {
        let mut all_points = points;
        push_unique(&mut all_points, seg.p1);
        push_unique(&mut all_points, seg.p2);
        all_points.sort_by(|a, b| match b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
            other => other,
        });
        all_points.dedup();
        out.insert(seg, all_points);
    }
    out
}

/// Rejects any pair of segments meeting at `p` that are collinear without a
/// shared endpoint, mirroring the per-event check in the sweep's main loop.
/// Two horizontal segments overlapping collinearly are exempted: that case
/// is handled by `handle_horizontal_collinear` instead of being an error.
fn reject_bad_collinearity(all: &[Segment]) -> Result<()> {
    for i in 0..all.len() {
        for j in (i + 1)..all.len() {
            let (s1, s2) = (&all[i], &all[j]);
            if s1.is_horizontal() && s2.is_horizontal() {
                continue;
            }
            if s1.is_collinear(s2) && s1.shared_endpoint(s2).is_none() {
                return Err(Error::Collinearity(format!("{s1} and {s2}")));
            }
        }
    }
    Ok(())
}

/// Overlap breakpoints for two collinear horizontal segments. Not reachable
/// through the generic intersection path since a horizontal line has no
/// unique x-intersection with itself.
fn handle_horizontal_collinear(
    all: &[Segment],
    intersections: &mut IntersectionMap,
    interior: &mut SplitMap,
) {
    for i in 0..all.len() {
        for j in (i + 1)..all.len() {
            let (s1, s2) = (&all[i], &all[j]);
            if !s1.is_horizontal() || !s2.is_horizontal() {
                continue;
            }
            if !s1.line().is_collinear(&s2.line()) {
                continue;
            }
            let (s1_left, s1_right) = s1.order_by_x();
            let (s2_left, s2_right) = s2.order_by_x();
            let left = if s1_left.x > s2_left.x { s1_left } else { s2_left };
            let right = if s1_right.x < s2_right.x { s1_right } else { s2_right };
            if left.x >= right.x - EPS {
                continue;
            }
            for point in [left, right] {
                let entry = intersections.entry(point).or_default();
                push_unique_segment(entry, s1);
                push_unique_segment(entry, s2);
                interior.entry(s1.clone()).or_default().push(point);
                interior.entry(s2.clone()).or_default().push(point);
            }
        }
    }
}

/// Schedules the intersection of `a` and `b`'s supporting lines as a new
/// event, if it lies strictly below the sweep line (or on it, to the right
/// of `p`). Collinear pairs are never scheduled here.
fn find_new_event(a: &Segment, b: &Segment, sweep_y: f64, p: Point, queue: &mut EventQueue) {
    if a.line().is_collinear(&b.line()) {
        return;
    }
    if let Some(q) = a.line().intersect(&b.line()) {
        let below = q.y < sweep_y - EPS;
        let level_and_right = (q.y - sweep_y).abs() < EPS && q.x > p.x + EPS;
        if below || level_and_right {
            queue.schedule(q, EventType::Intersection, vec![a.clone(), b.clone()]);
        }
    }
}

/// O(n²) reference: every pair tested directly, points deduplicated within
/// epsilon. Like the sweep line, this propagates `Error::Collinearity`
/// rather than silently dropping collinear-without-shared-endpoint pairs.
pub fn naive_intersection(segments: &[Segment]) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if let Some(p) = segments[i].intersection(&segments[j])? {
                push_unique(&mut points, p);
            }
        }
    }
    Ok(points)
}
