//! Property tests for filtering, pagination, and page resets.

use std::time::{Duration, Instant};

use kinoteka::{
    apply_filters, paginate, CatalogConfig, CatalogEngine, FilterState, Genre, Movie, PageState,
};
use proptest::prelude::*;

fn genre() -> impl Strategy<Value = Genre> {
    (0..Genre::ALL.len()).prop_map(|i| Genre::ALL[i])
}

fn movie() -> impl Strategy<Value = Movie> {
    (
        "[a-zA-Zа-яА-Я ]{0,12}",
        1985i32..2030,
        0u32..=50,
        genre(),
    )
        .prop_map(|(title, year, tenths, genre)| {
            Movie::new(0, title, year, f64::from(tenths) / 10.0, genre)
        })
}

fn catalog() -> impl Strategy<Value = Vec<Movie>> {
    prop::collection::vec(movie(), 0..60).prop_map(|mut movies| {
        for (i, movie) in movies.iter_mut().enumerate() {
            movie.id = i as u64 + 1;
        }
        movies
    })
}

proptest! {
    #[test]
    fn default_filters_keep_everything_in_range(items in catalog()) {
        let result = apply_filters(&items, &FilterState::default());
        let expected: Vec<Movie> = items
            .iter()
            .filter(|m| (1990..=2024).contains(&m.year))
            .cloned()
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn default_filters_are_identity_on_in_range_items(items in catalog()) {
        let items: Vec<Movie> = items
            .into_iter()
            .filter(|m| (1990..=2024).contains(&m.year))
            .collect();
        prop_assert_eq!(apply_filters(&items, &FilterState::default()), items);
    }

    #[test]
    fn search_has_no_false_positives_or_negatives(
        items in catalog(),
        needle in "[a-zA-Zа-яА-Я]{1,3}",
    ) {
        let state = FilterState::default().with_years(i32::MIN, i32::MAX).with_search(needle.clone());
        let result = apply_filters(&items, &state);
        let lowered = needle.to_lowercase();

        for movie in &result {
            prop_assert!(movie.title.to_lowercase().contains(&lowered));
        }
        let matching = items
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&lowered))
            .count();
        prop_assert_eq!(result.len(), matching);
    }

    #[test]
    fn single_genre_selection(items in catalog(), selected in genre()) {
        let state = FilterState::default().with_years(i32::MIN, i32::MAX).with_genre(selected);
        let result = apply_filters(&items, &state);

        prop_assert!(result.iter().all(|m| m.genre == selected));
        prop_assert_eq!(result.len(), items.iter().filter(|m| m.genre == selected).count());
    }

    #[test]
    fn result_is_an_ordered_subsequence(items in catalog(), low in 0u32..=50, high in 0u32..=50) {
        let state = FilterState::default()
            .with_ratings(f64::from(low.min(high)) / 10.0, f64::from(low.max(high)) / 10.0);
        let result = apply_filters(&items, &state);
        let ids: Vec<u64> = result.iter().map(|m| m.id).collect();

        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn pages_cover_the_result_exactly(n in 0usize..95, size in 1usize..15) {
        let items: Vec<usize> = (0..n).collect();
        let state = PageState::new(size);
        let pages = state.total_pages(n);

        let mut joined = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&items, &state.at(page));
            prop_assert!(slice.len() <= size);
            prop_assert!(!slice.is_empty());
            if page == pages {
                let expected = if n % size == 0 { size } else { n % size };
                prop_assert_eq!(slice.len(), expected);
            }
            joined.extend_from_slice(slice);
        }

        prop_assert_eq!(joined, items.clone());
        prop_assert!(paginate(&items, &state.at(pages + 1)).is_empty());
    }

    #[test]
    fn every_filter_change_resets_the_page(
        items in catalog(),
        selected in genre(),
        year in 1990i32..2024,
        rating in 0u32..50,
        word in "[а-я]{1,4}",
    ) {
        let t0 = Instant::now();
        let mut engine = CatalogEngine::new(items, &CatalogConfig::default());

        engine.set_page(usize::MAX);
        if engine.toggle_genre(selected, t0) {
            prop_assert_eq!(engine.page().current_page, 1);
        }

        engine.set_page(usize::MAX);
        if engine.set_year_range(year, 2024, t0) {
            prop_assert_eq!(engine.page().current_page, 1);
        }

        engine.set_page(usize::MAX);
        if engine.set_rating_range(f64::from(rating) / 10.0, 5.0, t0) {
            prop_assert_eq!(engine.page().current_page, 1);
        }

        engine.set_page(usize::MAX);
        engine.input_search(word, t0);
        engine.tick(t0 + Duration::from_millis(500));
        prop_assert_eq!(engine.page().current_page, 1);

        engine.set_page(usize::MAX);
        engine.clear_filters(t0);
        prop_assert_eq!(engine.page().current_page, 1);
        prop_assert_eq!(engine.filters(), &FilterState::default());
    }

    #[test]
    fn burst_of_keystrokes_commits_the_last_one(words in prop::collection::vec("[а-я]{1,4}", 1..8)) {
        let t0 = Instant::now();
        let mut engine = CatalogEngine::new(Vec::<Movie>::new(), &CatalogConfig::default());

        for (i, word) in words.iter().enumerate() {
            let now = t0 + Duration::from_millis(i as u64 * 50);
            engine.tick(now);
            prop_assert_eq!(engine.filters().search_text.as_str(), "");
            engine.input_search(word.clone(), now);
        }

        let last = t0 + Duration::from_millis((words.len() as u64 - 1) * 50);
        engine.tick(last + Duration::from_millis(500));
        prop_assert_eq!(engine.filters().search_text.as_str(), words[words.len() - 1].as_str());
        prop_assert!(!engine.is_loading());
    }
}
