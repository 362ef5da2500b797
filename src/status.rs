//! Sweep status: the segments currently crossed by the horizontal sweep
//! line, kept in left-to-right order by their x-intersection with a
//! reference line slightly below the current event.

use std::cmp::Ordering;

use crate::geometry::{Line, Segment, EPS};

struct Entry {
    score: f64,
    segment: Segment,
}

#[derive(Default)]
pub struct Status {
    entries: Vec<Entry>,
}

impl Status {
    pub fn new() -> Self {
        Status { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `segments`, scoring each by its x-intersection with
    /// `reference_line`, and merges them into the already-sorted status.
    /// Horizontal segments have no such intersection and are special-cased:
    /// placed at `max_key + EPS`, or `start.x - EPS` if the status is empty.
    pub fn add(&mut self, segments: Vec<Segment>, reference_line: Line) {
        let mut horizontals = Vec::new();
        let mut scored = Vec::new();
        for seg in segments {
            if seg.is_horizontal() {
                horizontals.push(seg);
            } else {
                let score = seg
                    .line()
                    .x_at(&reference_line)
                    .unwrap_or_else(|| seg.order_by_x().0.x);
                scored.push(Entry { score, segment: seg });
            }
        }
        self.entries.extend(scored);
        self.sort();
        for seg in horizontals {
            let score = match self.entries.last() {
                Some(e) => e.score + EPS,
                None => seg.order_by_x().0.x - EPS,
            };
            self.entries.push(Entry { score, segment: seg });
        }
    }

    fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    }

    /// Removes every entry whose segment is in `segments`.
    pub fn remove(&mut self, segments: &[Segment]) {
        self.entries.retain(|e| !segments.contains(&e.segment));
    }

    pub fn index(&self, segment: &Segment) -> Option<usize> {
        self.entries.iter().position(|e| &e.segment == segment)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.entries.iter().map(|e| &e.segment)
    }

    /// The segment immediately to the left and right of `segment`'s own
    /// position in the status.
    pub fn neighbours_of(&self, segment: &Segment) -> (Option<&Segment>, Option<&Segment>) {
        match self.index(segment) {
            Some(idx) => {
                let left = idx.checked_sub(1).and_then(|i| self.entries.get(i));
                let right = self.entries.get(idx + 1);
                (left.map(|e| &e.segment), right.map(|e| &e.segment))
            }
            None => (None, None),
        }
    }

    /// The segments immediately to the left and right of x-coordinate `x`,
    /// as if a new entry were inserted there without actually inserting it.
    pub fn neighbours_at(&self, x: f64) -> (Option<&Segment>, Option<&Segment>) {
        let mut left = None;
        let mut right = None;
        for e in &self.entries {
            if e.score < x - EPS {
                left = Some(&e.segment);
            } else if e.score > x + EPS {
                right = Some(&e.segment);
                break;
            }
        }
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn add_sorts_by_x_intersection() {
        let mut status = Status::new();
        let a = Segment::new(p(0.0, 10.0), p(0.0, 0.0));
        let b = Segment::new(p(5.0, 10.0), p(5.0, 0.0));
        let reference = Line::new(0.0, 5.0);
        status.add(vec![b.clone(), a.clone()], reference);
        let ordered: Vec<_> = status.iter().collect();
        assert_eq!(ordered, vec![&a, &b]);
    }

    #[test]
    fn horizontal_segment_placed_at_right_end() {
        let mut status = Status::new();
        let vertical = Segment::new(p(0.0, 10.0), p(0.0, 0.0));
        let reference = Line::new(0.0, 5.0);
        status.add(vec![vertical.clone()], reference);
        let horizontal = Segment::new(p(-3.0, 5.0), p(3.0, 5.0));
        status.add(vec![horizontal.clone()], reference);
        let ordered: Vec<_> = status.iter().collect();
        assert_eq!(ordered.last().unwrap(), &&horizontal);
    }

    #[test]
    fn neighbours_of_segment_by_position() {
        let mut status = Status::new();
        let a = Segment::new(p(0.0, 10.0), p(0.0, 0.0));
        let b = Segment::new(p(5.0, 10.0), p(5.0, 0.0));
        let c = Segment::new(p(10.0, 10.0), p(10.0, 0.0));
        let reference = Line::new(0.0, 5.0);
        status.add(vec![a.clone(), b.clone(), c.clone()], reference);
        let (left, right) = status.neighbours_of(&b);
        assert_eq!(left, Some(&a));
        assert_eq!(right, Some(&c));
        let (left, right) = status.neighbours_of(&a);
        assert_eq!(left, None);
        assert_eq!(right, Some(&b));
    }

    #[test]
    fn remove_drops_matching_segments() {
        let mut status = Status::new();
        let a = Segment::new(p(0.0, 10.0), p(0.0, 0.0));
        let b = Segment::new(p(5.0, 10.0), p(5.0, 0.0));
        let reference = Line::new(0.0, 5.0);
        status.add(vec![a.clone(), b.clone()], reference);
        status.remove(&[a.clone()]);
        assert_eq!(status.len(), 1);
        assert!(status.index(&b).is_some());
    }
}
