use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use tokendeck_engine::calculate_market_stats;
use tokendeck_types::Catalog;

pub fn handle(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let stats = calculate_market_stats(catalog.tokens());

    let view_model = presenters::present_market_stats(&stats);

    let renderer = ConsoleRenderer::new(format == OutputFormat::Json);
    renderer.render(view_model)
}
