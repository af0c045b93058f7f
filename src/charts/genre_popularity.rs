//! Grouped bar chart of the top genres per title type.

use anyhow::{Result, bail};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;

use super::{Chart, palette};
use crate::summary::GenrePopularity;

pub struct GenrePopularityChart<'a> {
    pub table: &'a GenrePopularity,
}

impl Chart for GenrePopularityChart<'_> {
    fn name(&self) -> &'static str {
        "genre_popularity"
    }

    fn size(&self) -> (u32, u32) {
        (1200, 720)
    }

    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        // Union of both label lists, movie ranking first.
        let mut labels: Vec<String> = Vec::new();
        for (genre, _) in self.table.movies.iter().chain(&self.table.shows) {
            if !labels.contains(genre) {
                labels.push(genre.clone());
            }
        }
        if labels.is_empty() {
            bail!("no genres to chart");
        }
        let max_count = self.table.max_count();

        let mut chart = ChartBuilder::on(area)
            .caption("Top genres by title type", ("sans-serif", 28).into_font())
            .margin(12)
            .x_label_area_size(170)
            .y_label_area_size(56)
            .build_cartesian_2d(0f64..labels.len() as f64, 0usize..max_count + 1)?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_| String::new())
            .y_desc("Titles")
            .draw()?;

        let movie_color = palette::MOVIE;
        chart
            .draw_series(self.table.movies.iter().filter_map(|(genre, count)| {
                let slot = labels.iter().position(|l| l == genre)? as f64;
                Some(Rectangle::new(
                    [(slot + 0.10, 0), (slot + 0.45, *count)],
                    movie_color.filled(),
                ))
            }))?
            .label("Movies")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], movie_color.filled())
            });

        let show_color = palette::TV_SHOW;
        chart
            .draw_series(self.table.shows.iter().filter_map(|(genre, count)| {
                let slot = labels.iter().position(|l| l == genre)? as f64;
                Some(Rectangle::new(
                    [(slot + 0.55, 0), (slot + 0.90, *count)],
                    show_color.filled(),
                ))
            }))?
            .label("TV shows")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], show_color.filled())
            });

        // Rotated genre labels under the bar slots.
        let label_style =
            TextStyle::from(("sans-serif", 15).into_font().transform(FontTransform::Rotate90));
        for (slot, label) in labels.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(slot as f64 + 0.4, 0));
            area.draw_text(label, &label_style, (x, y + 8))?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }
}
