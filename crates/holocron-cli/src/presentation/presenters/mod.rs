pub mod catalog;
pub mod people;
pub mod system;

pub use catalog::{present_movie_list, present_species_list};
pub use people::{
    people_page_guidance, present_people_page, present_person_detail, present_selection,
};
pub use system::{present_guidance, present_init, present_sync};
