pub mod catalog;
pub mod common;
pub mod people;
pub mod result;
pub mod system;

pub use catalog::{MovieEntry, MovieListViewModel, SpeciesEntry, SpeciesListViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use people::{
    ActiveFilter, PeopleListViewModel, PersonDetailViewModel, PersonRow, SelectionViewModel,
};
pub use result::CommandResultViewModel;
pub use system::{GuidanceViewModel, InitViewModel, SyncViewModel};
