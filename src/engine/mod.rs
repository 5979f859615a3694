//! Engine - The catalog page state machine.
//!
//! [`CatalogEngine`] owns the fixed movie collection and everything the
//! user can change about how it is shown: filters, typed-but-uncommitted
//! search text, the current page, and the loading flag.
//!
//! Loading goes `Idle -> Pending` on any filter or search input and back to
//! `Idle` once every armed timer has fired and the result is recomputed.
//! Time is passed in by the caller; drive timers with [`CatalogEngine::tick`].
//!
//! ## Example
//!
//! ```ignore
//! use std::time::{Duration, Instant};
//! use kinoteka::{fixtures, CatalogConfig, CatalogEngine};
//!
//! let config = CatalogConfig::default();
//! let mut engine = CatalogEngine::new(fixtures::generate_movies(42, 20), &config);
//!
//! let t0 = Instant::now();
//! engine.input_search("фильм 1", t0);
//! assert!(engine.is_loading());
//!
//! engine.tick(t0 + Duration::from_millis(500));
//! assert!(!engine.is_loading());
//! assert_eq!(engine.view().page.total, 11);
//! ```

mod view;

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::{Genre, Movie};
use crate::config::CatalogConfig;
use crate::debounce::Debouncer;
use crate::filter::{apply_filters, paginate, FilterState, PageState};

pub use view::{CatalogView, ViewStatus};

pub struct CatalogEngine {
    items: Arc<[Movie]>,
    defaults: FilterState,
    filters: FilterState,
    pending_search: String,
    search: Debouncer<String>,
    settle: Debouncer<()>,
    page: PageState,
    filtered: Vec<Movie>,
    loading: bool,
}

impl CatalogEngine {
    pub fn new(items: impl Into<Arc<[Movie]>>, config: &CatalogConfig) -> Self {
        let items = items.into();
        let defaults = config.default_filters();
        let filtered = apply_filters(&items, &defaults);

        CatalogEngine {
            items,
            filters: defaults.clone(),
            defaults,
            pending_search: String::new(),
            search: Debouncer::new(config.search_debounce()),
            settle: Debouncer::new(config.settle_debounce()),
            page: PageState::new(config.page_size),
            filtered,
            loading: false,
        }
    }

    /// A keystroke in the search box. Echoed immediately, applied after the
    /// quiet period.
    pub fn input_search(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.pending_search.clone_from(&text);
        self.search.push(text, now);
        self.sync_loading();
    }

    pub fn set_genres(&mut self, genres: BTreeSet<Genre>, now: Instant) -> bool {
        self.update_filters(now, |filters| filters.genres = genres)
    }

    pub fn toggle_genre(&mut self, genre: Genre, now: Instant) -> bool {
        self.update_filters(now, |filters| {
            if !filters.genres.remove(&genre) {
                filters.genres.insert(genre);
            }
        })
    }

    /// Set the year slider. The range is reordered and clamped to the bounds.
    pub fn set_year_range(&mut self, min: i32, max: i32, now: Instant) -> bool {
        let (low, high) = self.defaults.year_range;
        let range = (min.min(max).clamp(low, high), min.max(max).clamp(low, high));
        self.update_filters(now, |filters| filters.year_range = range)
    }

    /// Set the rating slider. The range is reordered and clamped to the bounds.
    pub fn set_rating_range(&mut self, min: f64, max: f64, now: Instant) -> bool {
        if min.is_nan() || max.is_nan() {
            return false;
        }
        let (low, high) = self.defaults.rating_range;
        let range = (min.min(max).max(low).min(high), min.max(max).max(low).min(high));
        self.update_filters(now, |filters| filters.rating_range = range)
    }

    /// Restore every filter and the page in a single transition.
    ///
    /// Any search commit still waiting on its timer is discarded.
    pub fn clear_filters(&mut self, now: Instant) {
        self.search.cancel();
        self.pending_search.clear();
        self.filters = self.defaults.clone();
        self.page.reset();
        self.recompute();
        self.settle.push((), now);
        self.sync_loading();
    }

    /// Jump to a page, clamped to the pages that exist. Returns the page
    /// actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page.current_page = self.page.clamp_page(page, self.filtered.len());
        self.page.current_page
    }

    /// Fire every timer that is due. Returns `true` if the visible result
    /// or the loading flag changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let was_loading = self.loading;
        let mut changed = false;

        if let Some(text) = self.search.poll(now) {
            if text != self.filters.search_text {
                tracing::debug!(search = %text, "search committed");
                self.filters.search_text = text;
                self.page.reset();
                self.recompute();
                changed = true;
            }
        }

        self.settle.poll(now);
        self.sync_loading();

        changed || was_loading != self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Earliest instant at which [`tick`](Self::tick) has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search.deadline(), self.settle.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The search box contents, including keystrokes not yet applied.
    pub fn pending_search(&self) -> &str {
        &self.pending_search
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    pub fn filtered(&self) -> &[Movie] {
        &self.filtered
    }

    /// Movies on the current page.
    pub fn current_items(&self) -> &[Movie] {
        paginate(&self.filtered, &self.page)
    }

    pub fn movie(&self, id: u64) -> Option<&Movie> {
        self.items.iter().find(|movie| movie.id == id)
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::new(self)
    }

    fn update_filters(&mut self, now: Instant, change: impl FnOnce(&mut FilterState)) -> bool {
        let mut next = self.filters.clone();
        change(&mut next);
        if next == self.filters {
            return false;
        }

        self.filters = next;
        self.page.reset();
        self.recompute();
        self.settle.push((), now);
        self.sync_loading();
        true
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.items, &self.filters);
        tracing::debug!(
            found = self.filtered.len(),
            total = self.items.len(),
            "catalog filtered"
        );
    }

    fn sync_loading(&mut self) {
        let loading = self.search.is_pending() || self.settle.is_pending();
        if loading != self.loading {
            tracing::debug!(loading, "catalog loading changed");
            self.loading = loading;
        }
    }
}
