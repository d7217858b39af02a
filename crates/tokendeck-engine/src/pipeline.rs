use tokendeck_types::{SortKey, TokenRecord, ViewState};

/// Select the records whose name or symbol contains `query`,
/// case-insensitively, preserving catalog order.
///
/// An empty query matches everything. An empty result is a valid
/// outcome and drives the caller's empty-state display; it is never
/// an error.
pub fn filter_catalog(catalog: &[TokenRecord], query: &str) -> Vec<TokenRecord> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle) || t.symbol.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Reorder `tokens` in place by `key`.
///
/// The sort is stable: records comparing equal keep the order they
/// arrived in, so repeated evaluation of the same view state yields
/// the same sequence.
pub fn sort_tokens(tokens: &mut [TokenRecord], key: SortKey) {
    match key {
        SortKey::Rank => tokens.sort_by(|a, b| a.rank.cmp(&b.rank)),
        SortKey::Price => tokens.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Change => tokens.sort_by(|a, b| b.change_24h.total_cmp(&a.change_24h)),
        SortKey::MarketCap => tokens.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap)),
    }
}

/// Derive the display sequence for the current view state: filter
/// first, then sort. Sorting never changes which records are included.
pub fn derive_view(catalog: &[TokenRecord], state: &ViewState) -> Vec<TokenRecord> {
    let mut visible = filter_catalog(catalog, &state.search_query);
    sort_tokens(&mut visible, state.sort_key);
    visible
}
