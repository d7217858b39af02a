use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use tokendeck_engine::derive_view;
use tokendeck_types::{Catalog, SortKey, ViewState};

pub fn handle(
    catalog: &Catalog,
    query: Option<String>,
    sort_key: SortKey,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut state = ViewState::new();
    if let Some(query) = query {
        state.set_query(query);
    }
    state.set_sort_key(sort_key);

    let mut visible = derive_view(catalog.tokens(), &state);
    let matched_count = visible.len();

    // --limit is an output convenience; it runs after the pipeline so
    // filter/sort semantics stay untouched.
    if let Some(limit) = limit {
        visible.truncate(limit);
    }

    let view_model = presenters::present_token_list(visible, matched_count, catalog.len(), &state);

    let renderer = ConsoleRenderer::new(format == OutputFormat::Json);
    renderer.render(view_model)
}
