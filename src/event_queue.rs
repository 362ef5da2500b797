//! Sweep-line event queue: an ordered dictionary of [`EventPoint`]s keyed by
//! point, ordered so that "pop the maximum" always yields the next point the
//! sweep line must stop at.

use std::cmp::Ordering;

use crate::geometry::{Point, Segment, EPS};
use crate::rbtree::RedBlackTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Start,
    End,
    Intersection,
}

#[derive(Debug, Clone)]
pub struct EventPoint {
    pub point: Point,
    pub event_type: EventType,
    pub segments: Vec<Segment>,
}

impl EventPoint {
    pub fn new(point: Point, event_type: EventType, segments: Vec<Segment>) -> Self {
        EventPoint { point, event_type, segments }
    }
}

impl PartialEq for EventPoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for EventPoint {}

/// Ordered so that y ascends first; points with equal y order by *descending*
/// x. The queue's "maximum" is therefore the topmost, then leftmost, point.
impl Ord for EventPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.point == other.point {
            return Ordering::Equal;
        }
        if (self.point.y - other.point.y).abs() < EPS {
            other
                .point
                .x
                .partial_cmp(&self.point.x)
                .unwrap_or(Ordering::Equal)
        } else {
            self.point
                .y
                .partial_cmp(&other.point.y)
                .unwrap_or(Ordering::Equal)
        }
    }
}

impl PartialOrd for EventPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Adapter over [`RedBlackTree`] implementing the merge-on-collision rule: an
/// insertion that lands on an existing point becomes an `Intersection` event
/// whose segment list is the union of both.
#[derive(Default)]
pub struct EventQueue {
    tree: RedBlackTree<EventPoint>,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue { tree: RedBlackTree::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Finds the event currently scheduled at `point`, if any.
    pub fn find(&self, point: Point) -> Option<&EventPoint> {
        let probe = EventPoint::new(point, EventType::Intersection, Vec::new());
        self.tree.search(&probe)
    }

    /// Schedules `segments` at `point` with the given type, merging with any
    /// event already present at that point into an `Intersection` event.
    pub fn schedule(&mut self, point: Point, event_type: EventType, segments: Vec<Segment>) {
        if let Some(existing) = self.find(point) {
            let mut merged = existing.segments.clone();
            for s in segments {
                if !merged.contains(&s) {
                    merged.push(s);
                }
            }
            let probe = EventPoint::new(point, EventType::Intersection, Vec::new());
            self.tree.delete(&probe);
            self.tree.insert(EventPoint::new(point, EventType::Intersection, merged));
        } else {
            self.tree.insert(EventPoint::new(point, event_type, segments));
        }
    }

    /// Removes and returns the next event to process (topmost, then
    /// leftmost).
    pub fn pop(&mut self) -> Option<EventPoint> {
        let max = self.tree.max()?.clone();
        self.tree.delete(&max)
    }
}
