mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tokendeck")]
#[command(about = "Browse and analyze token market data from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Load the token catalog from a JSON file instead of the builtin data"
    )]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
