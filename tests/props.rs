use catalog_insights::catalog::{Catalog, Title, TitleType};
use catalog_insights::summary::{TypeRatio, genre_counts, top_n};
use proptest::prelude::*;

const GENRE_POOL: [&str; 6] = [
    "Dramas",
    "Comedies",
    "Docuseries",
    "Thrillers",
    "Kids' TV",
    "Anime Series",
];

fn arb_title() -> impl Strategy<Value = Title> {
    (
        any::<bool>(),
        1990i32..2025,
        proptest::collection::vec(0usize..GENRE_POOL.len(), 0..4),
    )
        .prop_map(|(is_movie, year, genre_indexes)| {
            let mut genres: Vec<String> = genre_indexes
                .into_iter()
                .map(|i| GENRE_POOL[i].to_string())
                .collect();
            genres.dedup();
            Title {
                title: String::new(),
                title_type: if is_movie {
                    TitleType::Movie
                } else {
                    TitleType::TvShow
                },
                release_year: year,
                genres,
                country: "Unknown".to_string(),
            }
        })
}

proptest! {
    #[test]
    fn type_ratio_counts_always_sum_to_total(titles in proptest::collection::vec(arb_title(), 0..64)) {
        let catalog = Catalog { titles };
        let ratio = TypeRatio::build(&catalog);
        prop_assert_eq!(ratio.total(), catalog.len());
    }

    #[test]
    fn genre_expansion_contributes_one_bucket_entry_per_genre(
        titles in proptest::collection::vec(arb_title(), 0..64),
    ) {
        let catalog = Catalog { titles };
        for ty in TitleType::ALL {
            let counts = genre_counts(&catalog, ty);
            let expanded: usize = counts.values().sum();
            let listed: usize = catalog
                .titles
                .iter()
                .filter(|t| t.title_type == ty)
                .map(|t| t.genres.len())
                .sum();
            prop_assert_eq!(expanded, listed);
        }
    }

    #[test]
    fn top_n_is_bounded_and_sorted(
        titles in proptest::collection::vec(arb_title(), 0..64),
        n in 0usize..8,
    ) {
        let catalog = Catalog { titles };
        let top = top_n(genre_counts(&catalog, TitleType::Movie), n);
        if n > 0 {
            prop_assert!(top.len() <= n);
        }
        prop_assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
