//! `clap`-derived command line surface: `intersect` runs the sweep line over
//! a segment file, `overlay` merges two polygon subdivisions.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;

use crate::dcel::Dcel;
use crate::error::Result;
use crate::geometry::Point;
use crate::io::{geojson, segments};
use crate::overlay::overlay as compute_overlay;
use crate::plot;
use crate::sweep::sweep_line_intersection;

#[derive(Parser)]
#[command(name = "planar-overlay", about = "Sweep-line intersection and planar subdivision overlay")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report every intersection among the segments in a file.
    Intersect {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        plot: bool,
    },
    /// Overlay two polygon subdivisions read from `.txt` or `.geojson` files.
    Overlay {
        #[arg(long = "file-a")]
        file_a: PathBuf,
        #[arg(long = "file-b")]
        file_b: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        plot: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Intersect { file, output, plot: should_plot } => {
            run_intersect(&file, output.as_deref(), should_plot)
        }
        Command::Overlay { file_a, file_b, output, plot: should_plot } => {
            run_overlay(&file_a, &file_b, output.as_deref(), should_plot)
        }
    }
}

fn run_intersect(file: &Path, output: Option<&Path>, should_plot: bool) -> Result<()> {
    let (segs, expected) = segments::read_intersection_file(file)?;
    info!("read {} segments from {}", segs.len(), file.display());
    if expected == -1 {
        info!("file declares collinearity is expected");
    }
    let (intersections, _splitted) = sweep_line_intersection(&segs)?;
    println!("Number of intersections found: {}", intersections.len());
    if should_plot {
        let dir = output.unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;
        let points: Vec<Point> = intersections.keys().copied().collect();
        plot::render_intersections(&segs, &points, dir.join("intersections.png"))?;
    }
    Ok(())
}

fn run_overlay(file_a: &Path, file_b: &Path, output: Option<&Path>, should_plot: bool) -> Result<()> {
    let dcel_a = Dcel::new(read_rings(file_a)?, "s1")?;
    let dcel_b = Dcel::new(read_rings(file_b)?, "s2")?;
    info!(
        "overlaying {} faces against {} faces",
        dcel_a.interior_face_count(),
        dcel_b.interior_face_count()
    );
    let merged = compute_overlay(&dcel_a, &dcel_b)?;
    println!("Number of faces in overlay: {}", merged.interior_face_count());
    if should_plot {
        let dir = output.unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;
        plot::render_dcel_boundary(&merged, dir.join("overlay.png"))?;
    }
    Ok(())
}

fn read_rings(path: &Path) -> Result<Vec<Vec<(Point, Point)>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("geojson") => geojson::read_geojson_file(path),
        _ => segments::read_overlay_file(path),
    }
}
