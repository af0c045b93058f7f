//! Pie chart of the movie / TV show ratio.

use anyhow::{Result, bail};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{Chart, palette};
use crate::summary::TypeRatio;

pub struct TypeRatioChart<'a> {
    pub table: &'a TypeRatio,
}

impl Chart for TypeRatioChart<'_> {
    fn name(&self) -> &'static str {
        "type_ratio"
    }

    fn size(&self) -> (u32, u32) {
        (800, 640)
    }

    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let total = self.table.total();
        if total == 0 {
            bail!("catalog is empty, nothing to chart");
        }

        area.draw_text(
            "Movies vs. TV shows",
            &TextStyle::from(("sans-serif", 28).into_font()),
            (280, 16),
        )?;

        let center = (400, 340);
        let radius = 210.0;
        let mut start_angle = -90.0;
        for (title_type, count) in &self.table.counts {
            let fraction = *count as f64 / total as f64;
            let sweep = fraction * 360.0;
            draw_pie_segment(
                area,
                center,
                radius,
                start_angle,
                sweep,
                palette::type_color(*title_type),
            )?;

            // Label just outside the slice midpoint.
            let mid = (start_angle + sweep / 2.0).to_radians();
            let label_pos = (
                center.0 + (radius * 1.12 * mid.cos()) as i32 - 40,
                center.1 + (radius * 1.12 * mid.sin()) as i32,
            );
            area.draw_text(
                &format!("{} {:.1}%", title_type.label(), fraction * 100.0),
                &TextStyle::from(("sans-serif", 18).into_font()),
                label_pos,
            )?;
            start_angle += sweep;
        }
        Ok(())
    }
}

fn draw_pie_segment<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    center: (i32, i32),
    radius: f64,
    start_angle: f64,
    sweep_angle: f64,
    color: RGBColor,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let steps = 128;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = (start_angle + sweep_angle * i as f64 / steps as f64).to_radians();
        points.push((
            center.0 + (radius * angle.cos()) as i32,
            center.1 + (radius * angle.sin()) as i32,
        ));
    }
    area.draw(&Polygon::new(points, color.filled()))?;
    Ok(())
}
