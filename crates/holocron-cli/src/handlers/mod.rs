pub mod browse;
pub mod guidance;
pub mod init;
pub mod movies_list;
pub mod people_list;
pub mod people_select;
pub mod people_show;
pub mod session;
pub mod species_list;
pub mod sync;
