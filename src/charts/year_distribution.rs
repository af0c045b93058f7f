//! Overlaid per-type histogram of release years.

use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{Chart, palette};
use crate::catalog::TitleType;
use crate::summary::YearDistribution;

pub struct YearDistributionChart<'a> {
    pub table: &'a YearDistribution,
}

impl Chart for YearDistributionChart<'_> {
    fn name(&self) -> &'static str {
        "year_distribution"
    }

    fn size(&self) -> (u32, u32) {
        (1024, 640)
    }

    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let (min_year, max_year) = self
            .table
            .year_range()
            .ok_or_else(|| anyhow!("catalog has no release years"))?;
        let max_count = self.table.max_count();

        let mut chart = ChartBuilder::on(area)
            .caption("Releases per year", ("sans-serif", 28).into_font())
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(56)
            .build_cartesian_2d(
                (min_year..max_year + 1).into_segmented(),
                0usize..max_count + 1,
            )?;
        chart
            .configure_mesh()
            .x_desc("Release year")
            .y_desc("Titles")
            .draw()?;

        for title_type in TitleType::ALL {
            let color = palette::type_color(title_type).mix(0.6);
            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(color.filled())
                        .data(self.table.series(title_type)),
                )?
                .label(title_type.label())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }
}
