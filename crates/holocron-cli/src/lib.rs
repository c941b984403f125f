// Commands load the catalog once (cache first, network only when missing),
// hand it to a single `Browser`, and render whatever the browser derived.
// Nothing below `handlers` talks to the network or the filesystem.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, FilterArgs, LogLevel, MoviesCommand, OutputFormat, PeopleCommand, SpeciesCommand};
pub use commands::run;
