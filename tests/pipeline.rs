//! Integration tests driving the CLI's collaborating surfaces end to end:
//! write a fixture file, read it back through `io`, and feed the result
//! through the core algorithms, matching how a consumer actually uses this
//! crate rather than exercising `sweep`/`dcel` directly.

use planar_overlay::dcel::Dcel;
use planar_overlay::io::{geojson, segments};
use planar_overlay::overlay::overlay;
use planar_overlay::sweep::sweep_line_intersection;

fn write_fixture(name: &str, content: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("planar_overlay_pipeline_{name}_{}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn intersection_file_round_trips_through_sweep_line() {
    let path = write_fixture(
        "grid.txt",
        "4\n\
         0 0 10 0\n\
         0 5 10 5\n\
         3 -1 3 6\n\
         7 -1 7 6\n",
    );
    let (segs, expected) = segments::read_intersection_file(&path).unwrap();
    let (intersections, _splitted) = sweep_line_intersection(&segs).unwrap();
    assert_eq!(intersections.len() as i64, expected);
    std::fs::remove_file(path).ok();
}

#[test]
fn collinear_fixture_declares_the_expected_failure() {
    // Overlapping, non-horizontal collinear segments: they actually meet on
    // the sweep line, so the algorithm reaches the collinearity check
    // instead of never comparing two segments that never coexist in status.
    let path = write_fixture("collinear.txt", "-1\n0 0 2 2\n1 1 3 3\n");
    let (segs, expected) = segments::read_intersection_file(&path).unwrap();
    assert_eq!(expected, -1);
    let err = sweep_line_intersection(&segs).unwrap_err();
    assert!(matches!(err, planar_overlay::error::Error::Collinearity(_)));
    std::fs::remove_file(path).ok();
}

#[test]
fn overlay_ring_files_produce_the_expected_face_count() {
    let path_a = write_fixture("square_a.txt", "0 0 2 0\n2 0 2 2\n2 2 0 2\n0 2 0 0\n");
    let path_b = write_fixture("square_b.txt", "1 1 3 1\n3 1 3 3\n3 3 1 3\n1 3 1 1\n");
    let rings_a = segments::read_overlay_file(&path_a).unwrap();
    let rings_b = segments::read_overlay_file(&path_b).unwrap();
    let dcel_a = Dcel::new(rings_a, "s1").unwrap();
    let dcel_b = Dcel::new(rings_b, "s2").unwrap();
    let merged = overlay(&dcel_a, &dcel_b).unwrap();
    assert_eq!(merged.interior_face_count(), 3);
    std::fs::remove_file(path_a).ok();
    std::fs::remove_file(path_b).ok();
}

#[test]
fn geojson_overlapping_squares_match_the_ring_file_scenario() {
    let geojson_content = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0,0],[2,0],[2,2],[0,2],[0,0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[1,1],[3,1],[3,3],[1,3],[1,1]]]
                }
            }
        ]
    }"#;
    let path = write_fixture("squares.geojson", geojson_content);
    let rings = geojson::read_geojson_file(&path).unwrap();
    let dcel_a = Dcel::new(vec![rings[0].clone()], "s1").unwrap();
    let dcel_b = Dcel::new(vec![rings[1].clone()], "s2").unwrap();
    let merged = overlay(&dcel_a, &dcel_b).unwrap();
    assert_eq!(merged.interior_face_count(), 3);
    std::fs::remove_file(path).ok();
}

#[test]
fn disjoint_squares_overlay_to_two_faces_with_no_shared_vertices() {
    let path_a = write_fixture("disjoint_a.txt", "0 0 1 0\n1 0 1 1\n1 1 0 1\n0 1 0 0\n");
    let path_b = write_fixture("disjoint_b.txt", "5 5 6 5\n6 5 6 6\n6 6 5 6\n5 6 5 5\n");
    let rings_a = segments::read_overlay_file(&path_a).unwrap();
    let rings_b = segments::read_overlay_file(&path_b).unwrap();
    let dcel_a = Dcel::new(rings_a, "s1").unwrap();
    let dcel_b = Dcel::new(rings_b, "s2").unwrap();
    let merged = overlay(&dcel_a, &dcel_b).unwrap();
    assert_eq!(merged.interior_face_count(), 2);
    std::fs::remove_file(path_a).ok();
    std::fs::remove_file(path_b).ok();
}
