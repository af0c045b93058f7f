//! The fixed five-chart analysis pipeline: load and clean the catalog,
//! then derive and render each summary table in order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::{
    catalog::Catalog,
    charts::{
        self, country_genres::CountryGenresChart, genre_popularity::GenrePopularityChart,
        genre_trend::GenreTrendChart, type_ratio::TypeRatioChart,
        year_distribution::YearDistributionChart,
    },
    cli::{ChartArgs, ChartKind, RenderArgs, ReportArgs},
    io_utils,
    summary::{CountryGenres, GenrePopularity, GenreTrend, TypeRatio, YearDistribution},
};

const REPORT_ORDER: [ChartKind; 5] = [
    ChartKind::TypeRatio,
    ChartKind::YearDistribution,
    ChartKind::GenrePopularity,
    ChartKind::GenreTrend,
    ChartKind::GenreCountry,
];

pub fn execute(args: &ReportArgs) -> Result<()> {
    let catalog = load_catalog(&args.render)?;
    prepare_out_dir(&args.render.out_dir)?;
    for kind in REPORT_ORDER {
        render_kind(kind, &catalog, &args.render, args.dump_tables)?;
    }
    Ok(())
}

pub fn execute_single(args: &ChartArgs) -> Result<()> {
    let catalog = load_catalog(&args.render)?;
    prepare_out_dir(&args.render.out_dir)?;
    render_kind(args.kind, &catalog, &args.render, false)
}

fn load_catalog(args: &RenderArgs) -> Result<Catalog> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let limit = (args.limit > 0).then_some(args.limit);
    let catalog = Catalog::load(&args.input, delimiter, encoding, limit)
        .with_context(|| format!("Loading catalog from {:?}", args.input))?;
    info!("Loaded {} title(s) from {:?}", catalog.len(), args.input);
    Ok(catalog)
}

fn prepare_out_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Creating output directory {dir:?}"))
}

fn render_kind(kind: ChartKind, catalog: &Catalog, args: &RenderArgs, dump: bool) -> Result<()> {
    let out_dir = args.out_dir.as_path();
    let written = match kind {
        ChartKind::TypeRatio => {
            let table = TypeRatio::build(catalog);
            for (title_type, count) in &table.counts {
                info!("{}: {} title(s)", title_type, count);
            }
            if dump {
                dump_rows(
                    out_dir,
                    "type_ratio.csv",
                    table.counts.iter().map(|(ty, count)| TypeRow {
                        title_type: ty.label(),
                        count: *count,
                    }),
                )?;
            }
            charts::render(&TypeRatioChart { table: &table }, out_dir, args.format)?
        }
        ChartKind::YearDistribution => {
            let table = YearDistribution::build(catalog);
            if dump {
                dump_rows(
                    out_dir,
                    "year_distribution.csv",
                    table.counts.iter().map(|((year, ty), count)| YearRow {
                        release_year: *year,
                        title_type: ty.label(),
                        count: *count,
                    }),
                )?;
            }
            charts::render(&YearDistributionChart { table: &table }, out_dir, args.format)?
        }
        ChartKind::GenrePopularity => {
            let table = GenrePopularity::build(catalog, args.top_genres);
            if dump {
                let movies = table.movies.iter().map(|(genre, count)| GenreRow {
                    title_type: "Movie",
                    genre,
                    count: *count,
                });
                let shows = table.shows.iter().map(|(genre, count)| GenreRow {
                    title_type: "TV Show",
                    genre,
                    count: *count,
                });
                dump_rows(out_dir, "genre_popularity.csv", movies.chain(shows))?;
            }
            charts::render(&GenrePopularityChart { table: &table }, out_dir, args.format)?
        }
        ChartKind::GenreTrend => {
            let table = GenreTrend::build(catalog, args.trend_top);
            if dump {
                let rows = table.series.iter().flat_map(|(genre, points)| {
                    points.iter().map(move |(year, count)| TrendRow {
                        release_year: *year,
                        genre,
                        count: *count,
                    })
                });
                dump_rows(out_dir, "genre_trend.csv", rows)?;
            }
            charts::render(&GenreTrendChart { table: &table }, out_dir, args.format)?
        }
        ChartKind::GenreCountry => {
            let table = CountryGenres::build(catalog, args.top_countries, args.top_genres);
            if dump {
                let counts = &table;
                let rows = table.countries.iter().flat_map(|country| {
                    table.genres.iter().map(move |genre| CountryRow {
                        country,
                        genre,
                        count: counts.count(country, genre),
                    })
                });
                dump_rows(out_dir, "genre_by_country.csv", rows)?;
            }
            charts::render(&CountryGenresChart { table: &table }, out_dir, args.format)?
        }
    };
    info!("Wrote {written:?}");
    Ok(())
}

#[derive(Serialize)]
struct TypeRow<'a> {
    title_type: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct YearRow<'a> {
    release_year: i32,
    title_type: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct GenreRow<'a> {
    title_type: &'a str,
    genre: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct TrendRow<'a> {
    release_year: i32,
    genre: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct CountryRow<'a> {
    country: &'a str,
    genre: &'a str,
    count: usize,
}

fn dump_rows<T: Serialize>(
    out_dir: &Path,
    name: &str,
    rows: impl IntoIterator<Item = T>,
) -> Result<()> {
    let path = out_dir.join(name);
    let mut writer = io_utils::open_csv_writer(Some(&path), io_utils::DEFAULT_CSV_DELIMITER)?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Writing summary table {path:?}"))?;
    }
    writer
        .flush()
        .with_context(|| format!("Writing summary table {path:?}"))?;
    info!("Wrote {path:?}");
    Ok(())
}
