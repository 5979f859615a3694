use serde::Serialize;

use super::CatalogEngine;
use crate::catalog::Movie;
use crate::filter::{FilterState, Page};

/// What the catalog page should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewStatus {
    /// Show placeholders; a recomputation is pending.
    Loading,
    /// Nothing matched the filters.
    Empty,
    Ready,
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub page: Page<Movie>,
    pub loading: bool,
    /// Search box contents, ahead of the applied search text while typing.
    pub pending_search: String,
    pub filters: FilterState,
}

impl CatalogView {
    pub(super) fn new(engine: &CatalogEngine) -> Self {
        CatalogView {
            page: Page::of(engine.filtered(), &engine.page()),
            loading: engine.is_loading(),
            pending_search: engine.pending_search().to_string(),
            filters: engine.filters().clone(),
        }
    }

    pub fn status(&self) -> ViewStatus {
        if self.loading {
            ViewStatus::Loading
        } else if self.page.total == 0 {
            ViewStatus::Empty
        } else {
            ViewStatus::Ready
        }
    }

    /// The "nothing found" state.
    pub fn is_empty(&self) -> bool {
        self.status() == ViewStatus::Empty
    }

    /// Whether the pager is shown at all.
    pub fn shows_pager(&self) -> bool {
        self.status() == ViewStatus::Ready
    }
}
