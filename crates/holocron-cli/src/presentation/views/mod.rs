pub mod catalog;
pub mod people;
pub mod system;

pub use catalog::{MovieListView, SpeciesListView};
pub use people::{PeopleListView, PersonDetailView, SelectionView};
pub use system::{GuidanceView, InitView, SyncView};
