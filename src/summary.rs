//! Summary tables derived from the cleaned catalog.
//!
//! Every table is a plain mapping from one or two categorical keys to an
//! occurrence count, built in a single pass and consumed by exactly one
//! chart. Ordering follows the frequency convention: descending count,
//! ties broken by ascending key.

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;

use crate::catalog::{Catalog, TitleType};

pub fn sorted_counts<K: Ord>(counts: impl IntoIterator<Item = (K, usize)>) -> Vec<(K, usize)> {
    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

/// Truncates the sorted counts; never returns more than `n` entries
/// (`n == 0` keeps everything).
pub fn top_n<K: Ord>(counts: impl IntoIterator<Item = (K, usize)>, n: usize) -> Vec<(K, usize)> {
    let mut items = sorted_counts(counts);
    if n > 0 && items.len() > n {
        items.truncate(n);
    }
    items
}

/// Record count per title type.
#[derive(Debug, Clone)]
pub struct TypeRatio {
    pub counts: Vec<(TitleType, usize)>,
}

impl TypeRatio {
    pub fn build(catalog: &Catalog) -> Self {
        let counts = catalog.titles.iter().map(|t| t.title_type).counts();
        Self {
            counts: sorted_counts(counts),
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// Record count per (release year, title type).
#[derive(Debug, Clone)]
pub struct YearDistribution {
    pub counts: BTreeMap<(i32, TitleType), usize>,
}

impl YearDistribution {
    pub fn build(catalog: &Catalog) -> Self {
        let mut counts = BTreeMap::new();
        for title in &catalog.titles {
            *counts
                .entry((title.release_year, title.title_type))
                .or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.counts.keys().map(|(year, _)| *year).min()?;
        let max = self.counts.keys().map(|(year, _)| *year).max()?;
        Some((min, max))
    }

    pub fn series(&self, title_type: TitleType) -> Vec<(i32, usize)> {
        self.counts
            .iter()
            .filter(|((_, ty), _)| *ty == title_type)
            .map(|((year, _), count)| (*year, *count))
            .collect()
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// Top genres per title type, expanded from the genre lists.
#[derive(Debug, Clone)]
pub struct GenrePopularity {
    pub movies: Vec<(String, usize)>,
    pub shows: Vec<(String, usize)>,
}

impl GenrePopularity {
    pub fn build(catalog: &Catalog, top: usize) -> Self {
        Self {
            movies: top_n(genre_counts(catalog, TitleType::Movie), top),
            shows: top_n(genre_counts(catalog, TitleType::TvShow), top),
        }
    }

    pub fn max_count(&self) -> usize {
        self.movies
            .iter()
            .chain(&self.shows)
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0)
    }
}

pub fn genre_counts(catalog: &Catalog, title_type: TitleType) -> HashMap<String, usize> {
    catalog
        .titles
        .iter()
        .filter(|t| t.title_type == title_type)
        .flat_map(|t| t.genres.iter().cloned())
        .counts()
}

/// Per-genre line series of (release year, count), restricted to genres
/// that rank in the top `per_year` of at least one year.
#[derive(Debug, Clone)]
pub struct GenreTrend {
    pub series: Vec<(String, Vec<(i32, usize)>)>,
}

impl GenreTrend {
    pub fn build(catalog: &Catalog, per_year: usize) -> Self {
        let mut by_year: BTreeMap<i32, HashMap<String, usize>> = BTreeMap::new();
        for title in &catalog.titles {
            let bucket = by_year.entry(title.release_year).or_default();
            for genre in &title.genres {
                *bucket.entry(genre.clone()).or_insert(0) += 1;
            }
        }

        let mut kept: BTreeMap<String, BTreeMap<i32, usize>> = BTreeMap::new();
        for (year, counts) in by_year {
            for (genre, count) in top_n(counts, per_year) {
                kept.entry(genre).or_default().insert(year, count);
            }
        }

        let series = kept
            .into_iter()
            .map(|(genre, points)| (genre, points.into_iter().collect()))
            .collect();
        Self { series }
    }

    pub fn year_range(&self) -> Option<(i32, i32)> {
        self.series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(year, _)| *year))
            .minmax()
            .into_option()
    }

    pub fn max_count(&self) -> usize {
        self.series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(_, count)| *count))
            .max()
            .unwrap_or(0)
    }
}

/// Genre counts within the most frequent countries.
#[derive(Debug, Clone)]
pub struct CountryGenres {
    /// Most frequent countries, descending.
    pub countries: Vec<String>,
    /// Genres kept for the legend, descending by count within the
    /// retained countries.
    pub genres: Vec<String>,
    pub counts: HashMap<(String, String), usize>,
}

impl CountryGenres {
    pub fn build(catalog: &Catalog, top_countries: usize, top_genres: usize) -> Self {
        let country_counts = catalog.titles.iter().map(|t| t.country.clone()).counts();
        let countries: Vec<String> = top_n(country_counts, top_countries)
            .into_iter()
            .map(|(country, _)| country)
            .collect();

        let mut counts: HashMap<(String, String), usize> = HashMap::new();
        let mut genre_totals: HashMap<String, usize> = HashMap::new();
        for title in &catalog.titles {
            if !countries.contains(&title.country) {
                continue;
            }
            for genre in &title.genres {
                *counts
                    .entry((title.country.clone(), genre.clone()))
                    .or_insert(0) += 1;
                *genre_totals.entry(genre.clone()).or_insert(0) += 1;
            }
        }

        let genres: Vec<String> = top_n(genre_totals, top_genres)
            .into_iter()
            .map(|(genre, _)| genre)
            .collect();
        counts.retain(|(_, genre), _| genres.contains(genre));
        Self {
            countries,
            genres,
            counts,
        }
    }

    pub fn count(&self, country: &str, genre: &str) -> usize {
        self.counts
            .get(&(country.to_string(), genre.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Title;

    fn title(ty: TitleType, year: i32, genres: &str, country: &str) -> Title {
        Title {
            title: String::new(),
            title_type: ty,
            release_year: year,
            genres: crate::catalog::split_genres(genres),
            country: country.to_string(),
        }
    }

    #[test]
    fn sorted_counts_orders_by_count_then_key() {
        let counts = vec![("b", 2usize), ("c", 5), ("a", 2)];
        let sorted = sorted_counts(counts);
        assert_eq!(sorted, vec![("c", 5), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn top_n_never_exceeds_requested_size() {
        let counts = vec![("a", 1usize), ("b", 2), ("c", 3)];
        assert_eq!(top_n(counts.clone(), 2).len(), 2);
        assert_eq!(top_n(counts, 0).len(), 3);
    }

    #[test]
    fn type_ratio_counts_sum_to_total() {
        let catalog = Catalog {
            titles: vec![
                title(TitleType::Movie, 2019, "Dramas", "France"),
                title(TitleType::Movie, 2020, "Comedies", "France"),
                title(TitleType::TvShow, 2020, "Docuseries", "Unknown"),
            ],
        };
        let ratio = TypeRatio::build(&catalog);
        assert_eq!(ratio.total(), catalog.len());
        assert_eq!(ratio.counts[0], (TitleType::Movie, 2));
    }

    #[test]
    fn genre_counts_expand_multi_genre_records() {
        let catalog = Catalog {
            titles: vec![
                title(TitleType::Movie, 2019, "Drama, Comedy", "France"),
                title(TitleType::Movie, 2019, "Drama", "France"),
            ],
        };
        let counts = genre_counts(&catalog, TitleType::Movie);
        assert_eq!(counts.get("Drama"), Some(&2));
        assert_eq!(counts.get("Comedy"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn genre_trend_keeps_top_genres_per_year() {
        let catalog = Catalog {
            titles: vec![
                title(TitleType::Movie, 2018, "Drama", "France"),
                title(TitleType::Movie, 2018, "Drama", "France"),
                title(TitleType::Movie, 2018, "Comedy", "France"),
                title(TitleType::Movie, 2019, "Comedy", "France"),
            ],
        };
        let trend = GenreTrend::build(&catalog, 1);
        // Drama wins 2018, Comedy wins 2019.
        let genres: Vec<&str> = trend.series.iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(genres, vec!["Comedy", "Drama"]);
        let drama = &trend.series.iter().find(|(g, _)| g == "Drama").unwrap().1;
        assert_eq!(drama, &vec![(2018, 2)]);
    }

    #[test]
    fn country_genres_groups_unknown_rather_than_dropping() {
        let catalog = Catalog {
            titles: vec![
                title(TitleType::Movie, 2019, "Drama", "Unknown"),
                title(TitleType::Movie, 2019, "Drama", "Unknown"),
                title(TitleType::TvShow, 2020, "Docuseries", "India"),
            ],
        };
        let table = CountryGenres::build(&catalog, 10, 10);
        assert!(table.countries.contains(&"Unknown".to_string()));
        assert_eq!(table.count("Unknown", "Drama"), 2);
    }

    #[test]
    fn country_genres_restricts_to_most_frequent_countries() {
        let mut titles = Vec::new();
        for _ in 0..3 {
            titles.push(title(TitleType::Movie, 2019, "Drama", "France"));
        }
        titles.push(title(TitleType::Movie, 2019, "Drama", "Peru"));
        let table = CountryGenres::build(&Catalog { titles }, 1, 10);
        assert_eq!(table.countries, vec!["France".to_string()]);
        assert_eq!(table.count("Peru", "Drama"), 0);
    }
}
