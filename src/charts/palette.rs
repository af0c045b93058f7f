//! Deterministic series colors shared by all charts.

use plotters::style::RGBColor;

use crate::catalog::TitleType;

pub const MOVIE: RGBColor = RGBColor(59, 130, 246);
pub const TV_SHOW: RGBColor = RGBColor(245, 158, 11);

const SERIES: [RGBColor; 10] = [
    RGBColor(59, 130, 246),
    RGBColor(16, 185, 129),
    RGBColor(245, 158, 11),
    RGBColor(244, 63, 94),
    RGBColor(139, 92, 246),
    RGBColor(236, 72, 153),
    RGBColor(20, 184, 166),
    RGBColor(249, 115, 22),
    RGBColor(132, 204, 22),
    RGBColor(100, 116, 139),
];

pub fn type_color(title_type: TitleType) -> RGBColor {
    match title_type {
        TitleType::Movie => MOVIE,
        TitleType::TvShow => TV_SHOW,
    }
}

pub fn series_color(index: usize) -> RGBColor {
    SERIES[index % SERIES.len()]
}
