//! `tiny-skia` PNG rendering of segment sets, intersection points, and DCEL
//! boundaries, for visual inspection of the CLI's `--plot` output.

use std::path::Path;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::dcel::Dcel;
use crate::error::{Error, Result};
use crate::geometry::{Point, Segment};

const SCALE: f32 = 40.0;
const MARGIN: f32 = 50.0;
const CANVAS_SIZE: u32 = 1000;

pub fn draw_segments(pixmap: &mut Pixmap, segments: &[Segment], color: Color) {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    let stroke = Stroke { width: 2.0, ..Default::default() };
    for s in segments {
        let mut pb = PathBuilder::new();
        pb.move_to(s.p1.x as f32 * SCALE, s.p1.y as f32 * SCALE);
        pb.line_to(s.p2.x as f32 * SCALE, s.p2.y as f32 * SCALE);
        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::from_translate(MARGIN, MARGIN), None);
        }
    }
}

pub fn draw_points(pixmap: &mut Pixmap, points: &[Point], color: Color, radius: f32) {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    for p in points {
        if let Some(path) = PathBuilder::from_circle(p.x as f32 * SCALE, p.y as f32 * SCALE, radius) {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::from_translate(MARGIN, MARGIN), None);
        }
    }
}

fn blank_canvas() -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(CANVAS_SIZE, CANVAS_SIZE)
        .ok_or_else(|| Error::Parse("failed to allocate render canvas".into()))?;
    pixmap.fill(Color::WHITE);
    Ok(pixmap)
}

fn save(pixmap: &Pixmap, path: impl AsRef<Path>) -> Result<()> {
    pixmap
        .save_png(path)
        .map_err(|e| Error::Parse(format!("failed to write PNG: {e}")))
}

/// Renders a segment set in red with its intersection points in blue.
pub fn render_intersections(
    segments: &[Segment],
    intersections: &[Point],
    path: impl AsRef<Path>,
) -> Result<()> {
    let mut pixmap = blank_canvas()?;
    draw_segments(&mut pixmap, segments, Color::from_rgba8(200, 0, 0, 255));
    draw_points(&mut pixmap, intersections, Color::from_rgba8(0, 0, 200, 255), 4.0);
    save(&pixmap, path)
}

/// Renders every non-external face's boundary of a DCEL in green.
pub fn render_dcel_boundary(dcel: &Dcel, path: impl AsRef<Path>) -> Result<()> {
    let mut pixmap = blank_canvas()?;
    let segments: Vec<Segment> = dcel
        .segments()
        .into_iter()
        .flatten()
        .map(|(a, b)| Segment::new(a, b))
        .collect();
    draw_segments(&mut pixmap, &segments, Color::from_rgba8(0, 120, 0, 255));
    save(&pixmap, path)
}
