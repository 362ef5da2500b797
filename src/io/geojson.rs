//! Minimal GeoJSON `FeatureCollection` reader, restricted to `Polygon`
//! geometries.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::geometry::Point;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    #[serde(other)]
    Unsupported,
}

/// Parses a `FeatureCollection`, accepting only `Polygon` features, and
/// returns each ring as a closed directed-edge cycle, ready for
/// `Dcel::new`. The final coordinate of every GeoJSON ring duplicates its
/// first and is dropped.
pub fn read_geojson_file(path: impl AsRef<Path>) -> Result<Vec<Vec<(Point, Point)>>> {
    let content = std::fs::read_to_string(path)?;
    let collection: FeatureCollection =
        serde_json::from_str(&content).map_err(|e| Error::Parse(e.to_string()))?;

    let mut rings = Vec::new();
    for feature in collection.features {
        match feature.geometry {
            Geometry::Polygon { coordinates } => {
                for ring in coordinates {
                    rings.push(ring_from_coordinates(ring)?);
                }
            }
            Geometry::Unsupported => {
                return Err(Error::Dcel("only Polygon geometries are supported".into()));
            }
        }
    }
    Ok(rings)
}

fn ring_from_coordinates(coordinates: Vec<[f64; 2]>) -> Result<Vec<(Point, Point)>> {
    if coordinates.len() < 4 {
        return Err(Error::Parse("polygon ring has fewer than 3 distinct points".into()));
    }
    let points: Vec<Point> = coordinates[..coordinates.len() - 1]
        .iter()
        .map(|[x, y]| Point::new(*x, *y))
        .collect();
    let n = points.len();
    Ok((0..n).map(|i| (points[i], points[(i + 1) % n])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("planar_overlay_test_{name}_{}.geojson", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parses_two_overlapping_squares() {
        let geojson = r#"{
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
        let path = write_temp("squares", geojson);
        let rings = read_geojson_file(&path).unwrap();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].len(), 4);
        assert_eq!(rings[1].len(), 4);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_non_polygon_geometry() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "Point", "coordinates": [0, 0] }
                }
            ]
        }"#;
        let path = write_temp("point", geojson);
        let err = read_geojson_file(&path).unwrap_err();
        assert!(matches!(err, Error::Dcel(_)));
        std::fs::remove_file(path).ok();
    }
}
