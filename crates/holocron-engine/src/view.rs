use crate::filter::FilterState;
use crate::pagination::total_pages;
use crate::pipeline;
use holocron_types::Person;

/// Derived subset of the store satisfying every active filter.
///
/// Ephemeral: rebuilt by [`FilteredView::derive`] and never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    people: Vec<Person>,
    page_size: usize,
}

impl FilteredView {
    pub fn derive(people: &[Person], filters: &FilterState, page_size: usize) -> Self {
        Self {
            people: pipeline::apply(people, filters),
            page_size: page_size.max(1),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn count(&self) -> usize {
        self.people.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.people.len(), self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
