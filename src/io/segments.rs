//! Plain-text segment and overlay-ring file formats.

use std::path::Path;

use crate::error::{Error, Result};
use crate::geometry::{Point, Segment};

fn parse_four(line: &str) -> Result<[f64; 4]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(Error::Parse(format!("expected 4 numbers, got: {line}")));
    }
    let mut out = [0.0; 4];
    for (i, part) in parts.iter().enumerate() {
        out[i] = part
            .parse::<f64>()
            .map_err(|_| Error::Parse(format!("invalid number '{part}' in: {line}")))?;
    }
    Ok(out)
}

/// Reads the intersection-file format: first non-blank line is the expected
/// intersection count (`-1` means "expect `Error::Collinearity`"), each
/// following non-blank line is `x1 y1 x2 y2`. Duplicate and zero-length
/// segments are silently discarded.
pub fn read_intersection_file(path: impl AsRef<Path>) -> Result<(Vec<Segment>, i64)> {
    let content = std::fs::read_to_string(path)?;
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());
    let count_line = lines
        .next()
        .ok_or_else(|| Error::Parse("intersection file has no count line".into()))?;
    let expected: i64 = count_line
        .trim()
        .parse()
        .map_err(|_| Error::Parse(format!("invalid intersection count: {count_line}")))?;

    let mut segments: Vec<Segment> = Vec::new();
    for line in lines {
        let [x1, y1, x2, y2] = parse_four(line)?;
        let a = Point::new(x1, y1);
        let b = Point::new(x2, y2);
        if a == b {
            continue;
        }
        let seg = Segment::new(a, b);
        if !segments.contains(&seg) {
            segments.push(seg);
        }
    }
    Ok((segments, expected))
}

/// Reads the overlay-ring file format: blank-line-delimited blocks of
/// directed edge lines `x1 y1 x2 y2`, each block forming one polygon ring.
pub fn read_overlay_file(path: impl AsRef<Path>) -> Result<Vec<Vec<(Point, Point)>>> {
    let content = std::fs::read_to_string(path)?;
    let mut rings = Vec::new();
    let mut current: Vec<(Point, Point)> = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                rings.push(std::mem::take(&mut current));
            }
            continue;
        }
        let [x1, y1, x2, y2] = parse_four(line)?;
        current.push((Point::new(x1, y1), Point::new(x2, y2)));
    }
    if !current.is_empty() {
        rings.push(current);
    }
    Ok(rings)
}
