mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "holocron")]
#[command(about = "Browse, filter and page through the Star Wars character catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory [default: $HOLOCRON_PATH, then the platform data dir]"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Never fetch; fail when the catalog cache is missing")]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
