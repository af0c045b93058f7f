//! Typed title records and load-time cleaning.
//!
//! The catalog is loaded once and never mutated afterwards; every analysis
//! step derives read-only summary tables from it. Cleaning happens here:
//! a missing genre list collapses to zero genres and a missing country is
//! recoded to `"Unknown"` so that grouping never sees a null.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use thiserror::Error;

use crate::io_utils;

pub const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("unrecognized title type '{0}'")]
    UnknownTitleType(String),
    #[error("invalid release year '{0}'")]
    InvalidReleaseYear(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TitleType {
    Movie,
    TvShow,
}

impl TitleType {
    pub const ALL: [TitleType; 2] = [TitleType::Movie, TitleType::TvShow];

    pub fn label(self) -> &'static str {
        match self {
            TitleType::Movie => "Movie",
            TitleType::TvShow => "TV Show",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        match raw.trim() {
            "Movie" => Ok(TitleType::Movie),
            "TV Show" => Ok(TitleType::TvShow),
            other => Err(CatalogError::UnknownTitleType(other.to_string())),
        }
    }
}

impl fmt::Display for TitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cleaned row of the source dataset.
#[derive(Debug, Clone)]
pub struct Title {
    pub title: String,
    pub title_type: TitleType,
    pub release_year: i32,
    /// Genres split out of the comma-delimited `listed_in` column.
    pub genres: Vec<String>,
    /// Verbatim country cell, `"Unknown"` when the cell was empty.
    pub country: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub titles: Vec<Title>,
}

impl Catalog {
    pub fn load(
        path: &Path,
        delimiter: u8,
        encoding: &'static Encoding,
        limit: Option<usize>,
    ) -> Result<Self> {
        let mut reader = io_utils::open_csv_reader_from_path(path, delimiter, true)?;
        let headers = io_utils::reader_headers(&mut reader, encoding)?;
        let columns = ColumnMap::resolve(&headers)?;

        let mut titles = Vec::new();
        for (row_idx, record) in reader.byte_records().enumerate() {
            if let Some(limit) = limit
                && row_idx >= limit
            {
                break;
            }
            let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
            let decoded = io_utils::decode_record(&record, encoding)?;
            let title = Title::from_row(&columns, &decoded)
                .with_context(|| format!("Parsing row {}", row_idx + 2))?;
            titles.push(title);
        }
        Ok(Self { titles })
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[derive(Debug)]
struct ColumnMap {
    title: usize,
    title_type: usize,
    release_year: usize,
    listed_in: usize,
    country: usize,
}

impl ColumnMap {
    fn resolve(headers: &[String]) -> Result<Self, CatalogError> {
        Ok(Self {
            title: position(headers, "title")?,
            title_type: position(headers, "type")?,
            release_year: position(headers, "release_year")?,
            listed_in: position(headers, "listed_in")?,
            country: position(headers, "country")?,
        })
    }
}

fn position(headers: &[String], name: &'static str) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(CatalogError::MissingColumn(name))
}

impl Title {
    fn from_row(columns: &ColumnMap, row: &[String]) -> Result<Self> {
        let title_type = TitleType::parse(field(row, columns.title_type))?;
        let raw_year = field(row, columns.release_year).trim();
        let release_year = raw_year
            .parse::<i32>()
            .map_err(|_| CatalogError::InvalidReleaseYear(raw_year.to_string()))?;
        Ok(Self {
            title: field(row, columns.title).trim().to_string(),
            title_type,
            release_year,
            genres: split_genres(field(row, columns.listed_in)),
            country: clean_country(field(row, columns.country)),
        })
    }
}

fn field(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Genre expansion: one record with N listed genres yields N entries.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_country(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNKNOWN_COUNTRY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_genres_expands_comma_lists() {
        assert_eq!(split_genres("Dramas, Comedies"), vec!["Dramas", "Comedies"]);
        assert_eq!(split_genres("Dramas"), vec!["Dramas"]);
        assert!(split_genres("").is_empty());
        assert!(split_genres(" , ").is_empty());
    }

    #[test]
    fn clean_country_recodes_empty_cells() {
        assert_eq!(clean_country(""), UNKNOWN_COUNTRY);
        assert_eq!(clean_country("  "), UNKNOWN_COUNTRY);
        assert_eq!(clean_country("United States, Mexico"), "United States, Mexico");
    }

    #[test]
    fn title_type_parses_known_discriminators() {
        assert_eq!(TitleType::parse("Movie").unwrap(), TitleType::Movie);
        assert_eq!(TitleType::parse(" TV Show ").unwrap(), TitleType::TvShow);
        assert!(matches!(
            TitleType::parse("Short"),
            Err(CatalogError::UnknownTitleType(_))
        ));
    }

    #[test]
    fn from_row_rejects_unparsable_release_year() {
        let headers = ["title", "type", "release_year", "listed_in", "country"]
            .map(str::to_string)
            .to_vec();
        let columns = ColumnMap::resolve(&headers).unwrap();
        let row = ["Dust Roads", "Movie", "20x9", "Dramas", "France"]
            .map(str::to_string)
            .to_vec();
        let err = Title::from_row(&columns, &row).unwrap_err();
        assert!(err.to_string().contains("invalid release year"));
    }

    #[test]
    fn column_map_reports_missing_headers() {
        let headers = ["title", "type", "release_year"].map(str::to_string).to_vec();
        let err = ColumnMap::resolve(&headers).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn("listed_in")));
    }
}
