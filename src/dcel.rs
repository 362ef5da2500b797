//! Doubly-connected edge list: a planar subdivision of vertices, twinned
//! half-edges, and faces, built from a set of closed polygon rings.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub String);

#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: VertexId,
    pub point: Point,
    pub incident_edges: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
pub struct HalfEdge {
    pub id: EdgeId,
    pub origin: VertexId,
    pub twin: EdgeId,
    pub incident_face: Option<FaceId>,
    pub next: Option<EdgeId>,
    pub prev: Option<EdgeId>,
}

#[derive(Debug, Clone)]
pub struct Face {
    pub id: FaceId,
    pub outer_component: Option<EdgeId>,
    pub inner_components: Vec<EdgeId>,
}

/// A planar subdivision. Cross-references between vertices, half-edges and
/// faces are by id, looked up in the owning maps, rather than by direct
/// reference: the structure is densely cyclic (twin/next/prev/face→edge) and
/// an id-indirection graph sidesteps the aliasing a `Rc<RefCell<_>>` version
/// would force.
#[derive(Debug, Clone)]
pub struct Dcel {
    pub prefix: String,
    pub vertices: HashMap<VertexId, Vertex>,
    pub edges: HashMap<EdgeId, HalfEdge>,
    pub faces: HashMap<FaceId, Face>,
    pub(crate) point_index: HashMap<Point, VertexId>,
}

fn outgoing_angle(origin: Point, dest: Point) -> f64 {
    (dest.y - origin.y).atan2(dest.x - origin.x)
}

fn signed_area(cycle: &[EdgeId], vertices: &HashMap<VertexId, Vertex>, edges: &HashMap<EdgeId, HalfEdge>) -> f64 {
    let points: Vec<Point> = cycle
        .iter()
        .map(|e| vertices[&edges[e].origin].point)
        .collect();
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

impl Dcel {
    /// Builds a DCEL from a list of polygon rings, each given as an ordered
    /// list of directed edges `(origin, destination)` forming a closed
    /// simple cycle.
    pub fn new(polygons: Vec<Vec<(Point, Point)>>, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();

        // Phase 1: vertices.
        let mut vertices: HashMap<VertexId, Vertex> = HashMap::new();
        let mut point_index: HashMap<Point, VertexId> = HashMap::new();
        let mut vertex_num: HashMap<Point, usize> = HashMap::new();
        let mut counter = 0usize;
        for ring in &polygons {
            for (o, d) in ring {
                for pt in [*o, *d] {
                    if !point_index.contains_key(&pt) {
                        let vid = VertexId(format!("{prefix}_v_{counter}"));
                        vertices.insert(
                            vid.clone(),
                            Vertex { id: vid.clone(), point: pt, incident_edges: Vec::new() },
                        );
                        point_index.insert(pt, vid);
                        vertex_num.insert(pt, counter);
                        counter += 1;
                    }
                }
            }
        }

        // Phase 2: half-edges and their twins.
        let mut edges: HashMap<EdgeId, HalfEdge> = HashMap::new();
        for ring in &polygons {
            for (o, d) in ring {
                let oi = vertex_num[o];
                let di = vertex_num[d];
                let eid = EdgeId(format!("{prefix}_e_{oi}_{di}"));
                let twin_id = EdgeId(format!("{prefix}_e_{di}_{oi}"));
                if !edges.contains_key(&eid) {
                    let origin = point_index[o].clone();
                    edges.insert(
                        eid.clone(),
                        HalfEdge {
                            id: eid.clone(),
                            origin: origin.clone(),
                            twin: twin_id.clone(),
                            incident_face: None,
                            next: None,
                            prev: None,
                        },
                    );
                    vertices.get_mut(&origin).unwrap().incident_edges.push(eid.clone());
                }
                if !edges.contains_key(&twin_id) {
                    let origin = point_index[d].clone();
                    edges.insert(
                        twin_id.clone(),
                        HalfEdge {
                            id: twin_id.clone(),
                            origin: origin.clone(),
                            twin: eid.clone(),
                            incident_face: None,
                            next: None,
                            prev: None,
                        },
                    );
                    vertices.get_mut(&origin).unwrap().incident_edges.push(twin_id.clone());
                }
            }
        }

        // Phase 3: rotational order and next/prev wiring.
        let mut angle_cache: HashMap<EdgeId, f64> = HashMap::new();
        for (eid, he) in &edges {
            let twin = &edges[&he.twin];
            let origin_pt = vertices[&he.origin].point;
            let dest_pt = vertices[&twin.origin].point;
            angle_cache.insert(eid.clone(), outgoing_angle(origin_pt, dest_pt));
        }
        for vertex in vertices.values_mut() {
            vertex
                .incident_edges
                .sort_by(|a, b| angle_cache[b].partial_cmp(&angle_cache[a]).unwrap_or(Ordering::Equal));
        }
        let mut next_prev_pairs: Vec<(EdgeId, EdgeId)> = Vec::new();
        for vertex in vertices.values() {
            let n = vertex.incident_edges.len();
            if n == 0 {
                continue;
            }
            for i in 0..n {
                let e1 = &vertex.incident_edges[i];
                let e2 = &vertex.incident_edges[(i + 1) % n];
                let twin1 = edges[e1].twin.clone();
                next_prev_pairs.push((twin1, e2.clone()));
            }
        }
        for (twin1, e2) in next_prev_pairs {
            edges.get_mut(&twin1).unwrap().next = Some(e2.clone());
            edges.get_mut(&e2).unwrap().prev = Some(twin1);
        }

        // Phase 4: face assignment.
        let mut faces: HashMap<FaceId, Face> = HashMap::new();
        let mut visited: HashSet<EdgeId> = HashSet::new();
        let mut face_counter = 0usize;
        let mut external_face_found = false;
        let all_edge_ids: Vec<EdgeId> = edges.keys().cloned().collect();
        for start in all_edge_ids {
            if visited.contains(&start) {
                continue;
            }
            let mut cycle = Vec::new();
            let mut cur = start.clone();
            loop {
                cycle.push(cur.clone());
                visited.insert(cur.clone());
                let next = edges[&cur]
                    .next
                    .clone()
                    .ok_or_else(|| Error::Dcel(format!("half-edge {} has no next", cur.0)))?;
                cur = next;
                if cur == start {
                    break;
                }
            }
            let area = signed_area(&cycle, &vertices, &edges);
            let fid = FaceId(format!("{prefix}_f_{face_counter}"));
            face_counter += 1;
            for e in &cycle {
                edges.get_mut(e).unwrap().incident_face = Some(fid.clone());
            }
            if area > 0.0 {
                // TODO: holes are not detected here; an interior face's
                // inner_components always ends up empty even if the input
                // describes a ring with a hole in it.
                faces.insert(
                    fid.clone(),
                    Face { id: fid, outer_component: Some(cycle[0].clone()), inner_components: Vec::new() },
                );
            } else {
                external_face_found = true;
                faces.insert(fid.clone(), Face { id: fid, outer_component: None, inner_components: cycle });
            }
        }
        if !external_face_found {
            return Err(Error::Dcel("no external face identified".into()));
        }

        Ok(Dcel { prefix, vertices, edges, faces, point_index })
    }

    pub fn twin(&self, id: &EdgeId) -> &HalfEdge {
        &self.edges[&self.edges[id].twin]
    }

    pub fn destination(&self, id: &EdgeId) -> Point {
        self.vertices[&self.twin(id).origin].point
    }

    /// Number of faces excluding the external face.
    pub fn interior_face_count(&self) -> usize {
        self.faces.values().filter(|f| f.outer_component.is_some()).count()
    }

    /// For every non-external face, the ordered list of directed edges
    /// `(origin, destination)` walking its boundary.
    pub fn segments(&self) -> Vec<Vec<(Point, Point)>> {
        let mut out = Vec::new();
        for face in self.faces.values() {
            let Some(start) = &face.outer_component else {
                continue;
            };
            let mut ring = Vec::new();
            let mut cur = start.clone();
            loop {
                let he = &self.edges[&cur];
                let origin_pt = self.vertices[&he.origin].point;
                let dest_pt = self.destination(&cur);
                ring.push((origin_pt, dest_pt));
                cur = he.next.clone().expect("face cycle missing next");
                if cur == *start {
                    break;
                }
            }
            out.push(ring);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(Point, Point)> {
        vec![
            (p(x0, y0), p(x1, y0)),
            (p(x1, y0), p(x1, y1)),
            (p(x1, y1), p(x0, y1)),
            (p(x0, y1), p(x0, y0)),
        ]
    }

    #[test]
    fn single_square_has_one_interior_and_one_external_face() {
        let dcel = Dcel::new(vec![square(0.0, 0.0, 2.0, 2.0)], "s").unwrap();
        assert_eq!(dcel.interior_face_count(), 1);
        let external_count = dcel.faces.values().filter(|f| f.outer_component.is_none()).count();
        assert_eq!(external_count, 1);
    }

    #[test]
    fn twin_and_next_prev_invariants_hold() {
        let dcel = Dcel::new(vec![square(0.0, 0.0, 2.0, 2.0)], "s").unwrap();
        for (eid, he) in &dcel.edges {
            let twin = dcel.twin(eid);
            assert_eq!(&twin.twin, eid);
            let next_id = he.next.as_ref().unwrap();
            let next = &dcel.edges[next_id];
            let prev_of_next = next.prev.as_ref().unwrap();
            assert_eq!(prev_of_next, eid);
        }
    }

    #[test]
    fn segments_round_trips_the_input_ring() {
        let dcel = Dcel::new(vec![square(0.0, 0.0, 2.0, 2.0)], "s").unwrap();
        let rings = dcel.segments();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
    }

    #[test]
    fn every_half_edge_has_incident_face() {
        let dcel = Dcel::new(vec![square(0.0, 0.0, 2.0, 2.0)], "s").unwrap();
        for he in dcel.edges.values() {
            assert!(he.incident_face.is_some());
        }
    }
}
