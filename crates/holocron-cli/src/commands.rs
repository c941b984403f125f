use super::args::{Cli, Commands, LogLevel, MoviesCommand, PeopleCommand, SpeciesCommand};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;
use holocron_runtime::resolve_data_dir;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "data directory resolved");
    let ctx = ExecutionContext::new(data_dir, cli.format, cli.offline);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Init {
            base_url,
            page_size,
        } => handlers::init::handle(&ctx, base_url, page_size),

        Commands::Sync => handlers::sync::handle(&ctx),

        Commands::People { command } => match command {
            PeopleCommand::List { filters } => handlers::people_list::handle(&ctx, &filters),
            PeopleCommand::Show { id } => handlers::people_show::handle(&ctx, &id),
            PeopleCommand::Select { index, filters } => {
                handlers::people_select::handle(&ctx, index, &filters)
            }
        },

        Commands::Species { command } => match command {
            SpeciesCommand::List { search } => handlers::species_list::handle(&ctx, search),
        },

        Commands::Movies { command } => match command {
            MoviesCommand::List => handlers::movies_list::handle(&ctx),
        },

        Commands::Browse => handlers::browse::handle(&ctx),
    }
}

// Logs go to stderr so stdout stays parseable under --format json.
// RUST_LOG wins over --log-level when set.
fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
