use super::args::{Cli, Commands};
use super::handlers;
use anyhow::{Context, Result};
use tokendeck_types::Catalog;

pub fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(&cli)?;

    let Some(command) = cli.command else {
        show_guidance(&catalog);
        return Ok(());
    };

    match command {
        Commands::List {
            query,
            sort,
            limit,
            format,
        } => handlers::list::handle(&catalog, query, sort.into(), limit, format),

        Commands::Stats { format } => handlers::stats::handle(&catalog, format),

        Commands::Show { symbol, format } => handlers::show::handle(&catalog, &symbol, format),

        Commands::Watch => handlers::watch::handle(catalog),
    }
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    match &cli.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn show_guidance(catalog: &Catalog) {
    println!("tokendeck - Token market dashboard\n");
    println!("Tracking {} tokens.\n", catalog.len());
    println!("Quick commands:");
    println!("  tokendeck list                    # View the token list");
    println!("  tokendeck list --query eth        # Search by name or symbol");
    println!("  tokendeck list --sort mcap        # Order by market cap");
    println!("  tokendeck stats                   # Aggregate market statistics");
    println!("  tokendeck watch                   # Interactive dashboard\n");
    println!("For more commands:");
    println!("  tokendeck --help");
}
