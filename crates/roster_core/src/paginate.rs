//! Stateless page slicing.
//!
//! Pages are 1-indexed. Out-of-range pages yield empty slices instead of
//! errors; the caller owns the current-page state.

/// Returns the slice for `page`, clamped to `items.len()`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(count / page_size)`; zero when either input is zero.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// One rendered page plus the metadata pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Number of records matching the active criteria, across all pages.
    pub total_matches: usize,
}

impl<T: Clone> PageView<T> {
    /// Slices `matches` for `page`.
    pub fn build(matches: &[T], page: usize, page_size: usize) -> Self {
        Self {
            items: paginate(matches, page, page_size).to_vec(),
            page,
            page_size,
            total_pages: total_pages(matches.len(), page_size),
            total_matches: matches.len(),
        }
    }
}

impl<T> PageView<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Controls are hidden while every match fits on one page.
    pub fn shows_controls(&self) -> bool {
        self.total_matches > self.page_size
    }

    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}
