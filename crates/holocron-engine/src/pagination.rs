use serde::Serialize;

/// Characters shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page slice `[(page-1)*size, page*size)`, clipped to `items`.
///
/// Page numbers below 1 clamp to 1; a zero page size is treated as 1.
/// Paging past the end yields an empty slice.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let page_number = page_number.max(1);
    let page_size = page_size.max(1);

    let start = (page_number - 1).saturating_mul(page_size).min(items.len());
    let end = page_number.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Current page number plus the fixed page size of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    page: usize,
    page_size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// No upper clamp: past the last page the slice is simply empty
    pub fn next(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Jump straight to `page`, clamped to 1 like [`page`]
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.page < total_pages
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.page, self.page_size)
    }
}
