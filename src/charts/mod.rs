//! Chart rendering over `plotters`.
//!
//! Each chart consumes one prepared summary table and draws into a
//! backend-agnostic drawing area, so the same implementation renders to
//! SVG or to a bitmap depending on the requested output format.

pub mod country_genres;
pub mod genre_popularity;
pub mod genre_trend;
pub mod palette;
pub mod type_ratio;
pub mod year_distribution;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::cli::ChartFormat;

/// One chart over a prepared summary table.
pub trait Chart {
    /// File stem of the rendered output.
    fn name(&self) -> &'static str;

    /// Pixel dimensions of the drawing area.
    fn size(&self) -> (u32, u32) {
        (1024, 768)
    }

    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static;
}

/// Renders `chart` into `out_dir`, picking the backend from `format`.
/// Returns the path of the written file.
pub fn render<C: Chart>(chart: &C, out_dir: &Path, format: ChartFormat) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.{}", chart.name(), format.extension()));
    let size = chart.size();
    match format {
        ChartFormat::Svg => {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            root.fill(&WHITE)?;
            chart.draw(&root)?;
            root.present()
                .with_context(|| format!("Writing chart to {path:?}"))?;
        }
        ChartFormat::Png => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            root.fill(&WHITE)?;
            chart.draw(&root)?;
            root.present()
                .with_context(|| format!("Writing chart to {path:?}"))?;
        }
    }
    Ok(path)
}
