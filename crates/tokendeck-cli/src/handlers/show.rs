use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use tokendeck_types::Catalog;

pub fn handle(catalog: &Catalog, symbol: &str, format: OutputFormat) -> Result<()> {
    let Some(token) = catalog.find_symbol(symbol) else {
        anyhow::bail!("No token with symbol '{}' in the catalog", symbol);
    };

    let view_model = presenters::present_token_detail(token);

    let renderer = ConsoleRenderer::new(format == OutputFormat::Json);
    renderer.render(view_model)
}
