// Engine module - client-side derivation of the browsable character list
// This layer sits between a loaded catalog (types) and CLI presentation

pub mod browser;
pub mod filter;
pub mod observer;
pub mod pagination;
pub mod pipeline;
pub mod selection;
pub mod store;
pub mod view;

pub use browser::{BrowseEvent, BrowseOutcome, Browser, EventKind};
pub use filter::{FilterChange, FilterDimension, FilterState};
pub use observer::{Observer, Reaction, ViewContext};
pub use pagination::{DEFAULT_PAGE_SIZE, PageWindow, page, total_pages};
pub use pipeline::{apply, matches};
pub use selection::{NavigationTarget, resolve_ordinal};
pub use store::EntityStore;
pub use view::FilteredView;
