//! Horizontal grouped bars of genre counts per leading country.

use anyhow::{Result, bail};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{Chart, palette};
use crate::summary::CountryGenres;

pub struct CountryGenresChart<'a> {
    pub table: &'a CountryGenres,
}

impl Chart for CountryGenresChart<'_> {
    fn name(&self) -> &'static str {
        "genre_by_country"
    }

    fn size(&self) -> (u32, u32) {
        (1200, 800)
    }

    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let countries = &self.table.countries;
        let genres = &self.table.genres;
        if countries.is_empty() || genres.is_empty() {
            bail!("no country/genre counts to chart");
        }
        let max_count = self.table.max_count();

        let mut chart = ChartBuilder::on(area)
            .caption(
                "Leading genres in the most frequent countries",
                ("sans-serif", 28).into_font(),
            )
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(190)
            .build_cartesian_2d(0usize..max_count + 1, 0f64..countries.len() as f64)?;
        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Titles")
            .y_label_formatter(&|_| String::new())
            .draw()?;

        // One band per country, one bar per genre within the band.
        let band = 1.0 / (genres.len() as f64 + 1.0);
        let name_style = TextStyle::from(("sans-serif", 15).into_font());
        for (row, country) in countries.iter().enumerate() {
            for (idx, genre) in genres.iter().enumerate() {
                let count = self.table.count(country, genre);
                if count == 0 {
                    continue;
                }
                let y0 = row as f64 + band * (idx as f64 + 0.5);
                let y1 = y0 + band * 0.9;
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(0, y0), (count, y1)],
                    palette::series_color(idx).filled(),
                )))?;
            }
            let (_, y) = chart.backend_coord(&(0, row as f64 + 0.5));
            area.draw_text(country, &name_style, (12, y))?;
        }

        // Legend entries only; the zero-length paths draw nothing.
        for (idx, genre) in genres.iter().enumerate() {
            let color = palette::series_color(idx);
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(0usize, 0f64), (0usize, 0f64)],
                    color.stroke_width(1),
                )))?
                .label(genre.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }
}
