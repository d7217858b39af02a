use super::enums::{OutputFormat, SortField};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List tokens with search and sort options")]
    List {
        #[arg(long, help = "Keep only tokens whose name or symbol contains this text")]
        query: Option<String>,

        #[arg(long, default_value = "rank", help = "Display order")]
        sort: SortField,

        #[arg(long, help = "Show at most this many tokens")]
        limit: Option<usize>,

        #[arg(long, default_value = "plain", help = "Output format")]
        format: OutputFormat,
    },

    #[command(about = "Show aggregate market statistics over the whole catalog")]
    Stats {
        #[arg(long, default_value = "plain", help = "Output format")]
        format: OutputFormat,
    },

    #[command(about = "Display a single token by its symbol")]
    Show {
        symbol: String,

        #[arg(long, default_value = "plain", help = "Output format")]
        format: OutputFormat,
    },

    #[command(about = "Open the interactive dashboard")]
    Watch,
}
