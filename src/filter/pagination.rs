use serde::{Deserialize, Serialize};

/// Movies per catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The page the catalog is showing. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        PageState::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// First page with the given size. A zero size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        PageState {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn at(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Number of pages needed for `total` items.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Clamp `page` into `[1, max(1, total_pages)]`.
    pub fn clamp_page(&self, page: usize, total: usize) -> usize {
        page.clamp(1, self.total_pages(total).max(1))
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

/// Slice out the current page. Out-of-range pages yield an empty slice.
pub fn paginate<'a, T>(items: &'a [T], page: &PageState) -> &'a [T] {
    if page.current_page == 0 {
        return &[];
    }

    let start = (page.current_page - 1).saturating_mul(page.page_size);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page.page_size).min(items.len());
    &items[start..end]
}

/// One page of results plus the totals the pager needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    pub fn of(items: &[T], state: &PageState) -> Self {
        Page {
            items: paginate(items, state).to_vec(),
            total: items.len(),
            page: state.current_page,
            page_size: state.page_size,
            total_pages: state.total_pages(items.len()),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
