use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about = "Render descriptive charts from a streaming-title catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the first rows and a column summary of a catalog CSV
    Preview(PreviewArgs),
    /// Render the full set of catalog charts into a directory
    Report(ReportArgs),
    /// Render a single chart
    Chart(ChartArgs),
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input catalog CSV file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Number of rows to display
    #[arg(long, default_value_t = 5)]
    pub rows: usize,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub render: RenderArgs,
    /// Also write each summary table as a CSV file beside the charts
    #[arg(long = "dump-tables")]
    pub dump_tables: bool,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Chart to render
    #[arg(value_enum)]
    pub kind: ChartKind,
    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input catalog CSV file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Directory that receives the rendered chart files
    #[arg(short = 'o', long = "out-dir", default_value = "charts")]
    pub out_dir: PathBuf,
    /// Output image format
    #[arg(long, value_enum, default_value_t = ChartFormat::Svg)]
    pub format: ChartFormat,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Maximum number of rows to load (0 = all)
    #[arg(long, default_value_t = 0)]
    pub limit: usize,
    /// Number of genres to keep per title type in the popularity chart
    #[arg(long = "top-genres", default_value_t = 10)]
    pub top_genres: usize,
    /// Number of genres to keep per release year in the trend chart
    #[arg(long = "trend-top", default_value_t = 5)]
    pub trend_top: usize,
    /// Number of countries to keep in the country chart
    #[arg(long = "top-countries", default_value_t = 10)]
    pub top_countries: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ChartFormat {
    Svg,
    Png,
}

impl ChartFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ChartKind {
    TypeRatio,
    YearDistribution,
    GenrePopularity,
    GenreTrend,
    GenreCountry,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
