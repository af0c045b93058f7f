//! Line series of leading genre counts per release year.

use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{Chart, palette};
use crate::summary::GenreTrend;

pub struct GenreTrendChart<'a> {
    pub table: &'a GenreTrend,
}

impl Chart for GenreTrendChart<'_> {
    fn name(&self) -> &'static str {
        "genre_trend"
    }

    fn size(&self) -> (u32, u32) {
        (1100, 660)
    }

    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let (min_year, max_year) = self
            .table
            .year_range()
            .ok_or_else(|| anyhow!("no genre counts to chart"))?;
        let max_count = self.table.max_count();

        let mut chart = ChartBuilder::on(area)
            .caption(
                "Leading genres by release year",
                ("sans-serif", 28).into_font(),
            )
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(56)
            .build_cartesian_2d(min_year..max_year + 1, 0usize..max_count + 1)?;
        chart
            .configure_mesh()
            .x_desc("Release year")
            .y_desc("Titles")
            .draw()?;

        for (idx, (genre, points)) in self.table.series.iter().enumerate() {
            let color = palette::series_color(idx);
            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(2),
                ))?
                .label(genre.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }
}
