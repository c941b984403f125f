use super::common::FilterArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write the configuration file")]
    Init {
        #[arg(long, help = "Root URL of the catalog API")]
        base_url: Option<String>,

        #[arg(long, help = "Characters per page")]
        page_size: Option<usize>,
    },

    #[command(about = "Fetch the whole catalog and refresh the local cache")]
    Sync,

    #[command(about = "List, inspect and select characters")]
    People {
        #[command(subcommand)]
        command: PeopleCommand,
    },

    #[command(about = "List species")]
    Species {
        #[command(subcommand)]
        command: SpeciesCommand,
    },

    #[command(about = "List movies")]
    Movies {
        #[command(subcommand)]
        command: MoviesCommand,
    },

    #[command(about = "Interactive filter and paging session reading commands from stdin")]
    Browse,
}

#[derive(Subcommand)]
pub enum PeopleCommand {
    #[command(about = "Show one page of the filtered character list")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(about = "Show one character by id")]
    Show { id: String },

    #[command(about = "Select a row of a page and print where it leads")]
    Select {
        #[arg(help = "0-based row on the page")]
        index: usize,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Subcommand)]
pub enum SpeciesCommand {
    #[command(about = "List species, optionally narrowed by name")]
    List {
        #[arg(long, help = "Case-insensitive name substring")]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MoviesCommand {
    #[command(about = "List movies")]
    List,
}
