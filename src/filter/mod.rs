//! Filter - Predicates over the catalog and page slicing of the result.
//!
//! Filtering is a pure function of the movie collection and a
//! [`FilterState`]; it is recomputed from scratch on every change.

mod pagination;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Genre, Movie};

pub use pagination::{paginate, Page, PageState, DEFAULT_PAGE_SIZE};

/// Full, unrestricted year range.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1990, 2024);

/// Full, unrestricted rating range.
pub const DEFAULT_RATING_RANGE: (f64, f64) = (0.0, 5.0);

/// What the user has asked the catalog to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    /// Empty means "any genre".
    pub genres: BTreeSet<Genre>,
    /// Inclusive on both ends.
    pub year_range: (i32, i32),
    /// Inclusive on both ends.
    pub rating_range: (f64, f64),
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState::with_bounds(DEFAULT_YEAR_RANGE, DEFAULT_RATING_RANGE)
    }
}

impl FilterState {
    /// Unrestricted state for the given slider bounds.
    pub fn with_bounds(year_range: (i32, i32), rating_range: (f64, f64)) -> Self {
        FilterState {
            search_text: String::new(),
            genres: BTreeSet::new(),
            year_range,
            rating_range,
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genres.insert(genre);
        self
    }

    pub fn with_years(mut self, min: i32, max: i32) -> Self {
        self.year_range = (min, max);
        self
    }

    pub fn with_ratings(mut self, min: f64, max: f64) -> Self {
        self.rating_range = (min, max);
        self
    }

    /// Check a single movie against every active predicate.
    pub fn matches(&self, movie: &Movie) -> bool {
        Matcher::new(self).matches(movie)
    }
}

/// A [`FilterState`] with the search needle lowercased once.
struct Matcher<'a> {
    state: &'a FilterState,
    needle: String,
}

impl<'a> Matcher<'a> {
    fn new(state: &'a FilterState) -> Self {
        Matcher {
            state,
            needle: state.search_text.to_lowercase(),
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        let state = self.state;

        let matches_search =
            self.needle.is_empty() || movie.title.to_lowercase().contains(&self.needle);
        let matches_genre = state.genres.is_empty() || state.genres.contains(&movie.genre);
        let matches_year = movie.year >= state.year_range.0 && movie.year <= state.year_range.1;
        let matches_rating =
            movie.rating >= state.rating_range.0 && movie.rating <= state.rating_range.1;

        matches_search && matches_genre && matches_year && matches_rating
    }
}

/// The order-preserving subsequence of `items` that passes every filter.
pub fn apply_filters(items: &[Movie], state: &FilterState) -> Vec<Movie> {
    let matcher = Matcher::new(state);
    items
        .iter()
        .filter(|movie| matcher.matches(movie))
        .cloned()
        .collect()
}
