use clap::Args;
use holocron_types::BirthYear;

/// Filter flags shared by `people list` and `people select`
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long, help = "Species name, id or locator")]
    pub species: Option<String>,

    #[arg(long, help = "Movie title, id or locator")]
    pub movie: Option<String>,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Earliest birth year (e.g. 41BBY, -41, 4ABY)"
    )]
    pub born_from: Option<BirthYear>,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Latest birth year (e.g. 19BBY, -19, 4ABY)"
    )]
    pub born_to: Option<BirthYear>,

    #[arg(long, default_value = "1", help = "Page number, starting at 1")]
    pub page: usize,
}
