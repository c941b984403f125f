use crate::pagination::PageWindow;
use holocron_types::{Locator, extract_id};
use serde::Serialize;

/// Display ordinal of the `index_on_page`-th row of `page_number`.
///
/// `(page - 1) * size + index + 1`. Used for numbering and routes only; it
/// is not a stable identifier. Saturates at `usize::MAX` on absurd pages.
pub fn resolve_ordinal(page_number: usize, page_size: usize, index_on_page: usize) -> usize {
    (page_number.max(1) - 1)
        .saturating_mul(page_size)
        .saturating_add(index_on_page)
        .saturating_add(1)
}

/// Where a selection leads: the list ordinal and the catalog id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTarget {
    pub ordinal: usize,
    pub id: String,
}

impl NavigationTarget {
    pub fn resolve(window: &PageWindow, index_on_page: usize, locator: &Locator) -> Self {
        Self {
            ordinal: resolve_ordinal(window.page(), window.page_size(), index_on_page),
            id: extract_id(locator.as_str()).to_string(),
        }
    }

    pub fn route(&self) -> String {
        format!("characters/{}?swapiId={}", self.ordinal, self.id)
    }
}
