use crate::filter::{FilterChange, FilterState};
use crate::observer::{Observer, Reaction, ViewContext};
use crate::pagination::PageWindow;
use crate::selection::NavigationTarget;
use crate::store::EntityStore;
use crate::view::FilteredView;
use holocron_types::{CatalogSnapshot, Locator, Person};
use serde::Serialize;

/// Discrete input to the browse session
#[derive(Debug, Clone)]
pub enum BrowseEvent {
    /// One-shot upstream load of the complete catalog
    Loaded(CatalogSnapshot),
    Filter(FilterChange),
    /// Several filter changes applied as one transition
    Batch(Vec<FilterChange>),
    ResetFilters,
    NextPage,
    PrevPage,
    /// Jump to a 1-based page in one step
    GoToPage(usize),
    Select { index: usize, locator: Locator },
}

impl BrowseEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            BrowseEvent::Loaded(_) => EventKind::Loaded,
            BrowseEvent::Filter(_) | BrowseEvent::Batch(_) => EventKind::Filter,
            BrowseEvent::ResetFilters => EventKind::Reset,
            BrowseEvent::NextPage | BrowseEvent::PrevPage | BrowseEvent::GoToPage(_) => {
                EventKind::Navigate
            }
            BrowseEvent::Select { .. } => EventKind::Select,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Loaded,
    Filter,
    Reset,
    Navigate,
    Select,
}

/// What processing one event did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOutcome {
    pub rederived: bool,
    pub target: Option<NavigationTarget>,
}

/// Single owner of the catalog, filter state, page window and the derived
/// view. Events are processed one at a time; the filtered view is rebuilt
/// at most once per event and observers are notified exactly once.
pub struct Browser {
    store: EntityStore,
    filters: FilterState,
    window: PageWindow,
    view: FilteredView,
    observers: Vec<Box<dyn Observer>>,
    current_person: Option<String>,
    derivations: u64,
}

impl Browser {
    pub fn new(page_size: usize) -> Self {
        let window = PageWindow::new(page_size);
        Self {
            store: EntityStore::empty(),
            filters: FilterState::new(),
            view: FilteredView::derive(&[], &FilterState::new(), window.page_size()),
            window,
            observers: Vec::new(),
            current_person: None,
            derivations: 0,
        }
    }

    pub fn with_snapshot(snapshot: CatalogSnapshot, page_size: usize) -> Self {
        let mut browser = Self::new(page_size);
        browser.dispatch(BrowseEvent::Loaded(snapshot));
        browser
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        tracing::debug!(observer = observer.name(), "observer subscribed");
        self.observers.push(observer);
    }

    pub fn dispatch(&mut self, event: BrowseEvent) -> BrowseOutcome {
        let kind = event.kind();
        let mut outcome = BrowseOutcome::default();

        match event {
            BrowseEvent::Loaded(snapshot) => {
                tracing::info!(
                    people = snapshot.people.len(),
                    species = snapshot.species.len(),
                    movies = snapshot.movies.len(),
                    "catalog loaded"
                );
                self.store.load(snapshot);
                self.rederive();
                outcome.rederived = true;
            }
            BrowseEvent::Filter(change) => {
                tracing::debug!(dimension = %change.dimension(), "filter changed");
                self.filters.set(change);
                self.rederive();
                outcome.rederived = true;
            }
            BrowseEvent::Batch(changes) => {
                tracing::debug!(changes = changes.len(), "batched filter change");
                for change in changes {
                    self.filters.set(change);
                }
                self.rederive();
                outcome.rederived = true;
            }
            BrowseEvent::ResetFilters => {
                self.filters.reset_all();
                self.rederive();
                outcome.rederived = true;
            }
            BrowseEvent::NextPage => self.window.next(),
            BrowseEvent::PrevPage => self.window.prev(),
            BrowseEvent::GoToPage(page) => self.window.go_to(page),
            BrowseEvent::Select { index, locator } => {
                let target = NavigationTarget::resolve(&self.window, index, &locator);
                tracing::debug!(ordinal = target.ordinal, id = %target.id, "person selected");
                self.current_person = Some(target.id.clone());
                outcome.target = Some(target);
            }
        }

        self.notify(kind, outcome.target.as_ref());
        outcome
    }

    fn rederive(&mut self) {
        self.view = FilteredView::derive(self.store.people(), &self.filters, self.window.page_size());
        self.window.reset();
        self.derivations += 1;
        tracing::debug!(
            count = self.view.count(),
            total_pages = self.view.total_pages(),
            active_filters = self.filters.active_count(),
            "filtered view derived"
        );
    }

    fn notify(&mut self, kind: EventKind, target: Option<&NavigationTarget>) {
        if self.observers.is_empty() {
            return;
        }

        let mut observers = std::mem::take(&mut self.observers);
        let ctx = ViewContext {
            kind,
            store: &self.store,
            filters: &self.filters,
            window: &self.window,
            view: &self.view,
            page: self.window.slice(self.view.people()),
            target,
        };

        for observer in observers.iter_mut() {
            match observer.handle(ctx) {
                Ok(Reaction::Continue) => {}
                Ok(Reaction::Warn(message)) => {
                    tracing::warn!(observer = observer.name(), "{}", message);
                }
                Err(err) => {
                    tracing::error!(observer = observer.name(), error = %err, "observer failed");
                }
            }
        }

        self.observers = observers;
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Rows of the current page; empty before the catalog is loaded
    pub fn current_page(&self) -> &[Person] {
        self.window.slice(self.view.people())
    }

    /// Id of the most recently selected person
    pub fn current_person(&self) -> Option<&str> {
        self.current_person.as_deref()
    }

    /// Number of filtered-view derivations performed so far
    pub fn derivations(&self) -> u64 {
        self.derivations
    }
}
