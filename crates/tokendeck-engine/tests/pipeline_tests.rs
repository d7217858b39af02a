//! View Pipeline Tests
//!
//! Verifies the filter/sort composition and the aggregate statistics
//! against the builtin catalog.

use tokendeck_engine::{calculate_market_stats, derive_view, filter_catalog, sort_tokens};
use tokendeck_types::{Catalog, SortKey, ViewState};

fn symbols(tokens: &[tokendeck_types::TokenRecord]) -> Vec<String> {
    tokens.iter().map(|t| t.symbol.clone()).collect()
}

#[test]
fn test_filter_correctness() {
    // Given: the builtin catalog and a handful of queries
    let catalog = Catalog::builtin();

    for query in ["o", "er", "ba", "USD"] {
        let needle = query.to_lowercase();
        let hits = filter_catalog(catalog.tokens(), query);

        // Then: every included token matches on name or symbol
        for token in &hits {
            assert!(
                token.name.to_lowercase().contains(&needle)
                    || token.symbol.to_lowercase().contains(&needle),
                "token {} should not match query {:?}",
                token.symbol,
                query
            );
        }

        // And: every excluded token fails both checks
        let included = symbols(&hits);
        for token in catalog.tokens() {
            if !included.contains(&token.symbol) {
                assert!(
                    !token.name.to_lowercase().contains(&needle)
                        && !token.symbol.to_lowercase().contains(&needle),
                    "token {} was wrongly excluded for query {:?}",
                    token.symbol,
                    query
                );
            }
        }
    }
}

#[test]
fn test_empty_query_returns_full_catalog_in_order() {
    let catalog = Catalog::builtin();
    let hits = filter_catalog(catalog.tokens(), "");

    assert_eq!(symbols(&hits), symbols(catalog.tokens()));
}

#[test]
fn test_filter_preserves_catalog_order() {
    let catalog = Catalog::builtin();
    let hits = filter_catalog(catalog.tokens(), "o");

    let ranks: Vec<u32> = hits.iter().map(|t| t.rank).collect();
    let mut ascending = ranks.clone();
    ascending.sort();
    assert_eq!(ranks, ascending, "filter must keep catalog order");
}

#[test]
fn test_sort_is_idempotent() {
    let catalog = Catalog::builtin();

    for key in [SortKey::Rank, SortKey::Price, SortKey::Change, SortKey::MarketCap] {
        let mut once = catalog.tokens().to_vec();
        sort_tokens(&mut once, key);

        let mut twice = once.clone();
        sort_tokens(&mut twice, key);

        assert_eq!(symbols(&once), symbols(&twice));
    }
}

#[test]
fn test_sort_is_a_permutation_of_the_filtered_set() {
    let catalog = Catalog::builtin();

    for key in [SortKey::Rank, SortKey::Price, SortKey::Change, SortKey::MarketCap] {
        let filtered = filter_catalog(catalog.tokens(), "e");
        let mut sorted = filtered.clone();
        sort_tokens(&mut sorted, key);

        let mut before = symbols(&filtered);
        let mut after = symbols(&sorted);
        before.sort();
        after.sort();
        assert_eq!(before, after, "sort with {:?} changed membership", key);
    }
}

#[test]
fn test_sort_orders() {
    let catalog = Catalog::builtin();

    let mut by_price = catalog.tokens().to_vec();
    sort_tokens(&mut by_price, SortKey::Price);
    assert_eq!(by_price[0].symbol, "ETH");
    assert_eq!(by_price[1].symbol, "VIRTUAL");
    assert_eq!(by_price.last().map(|t| t.symbol.as_str()), Some("BENJI"));

    let mut by_change = catalog.tokens().to_vec();
    sort_tokens(&mut by_change, SortKey::Change);
    assert_eq!(by_change[0].symbol, "BENJI");
    assert_eq!(by_change[1].symbol, "DEGEN");
    assert_eq!(by_change.last().map(|t| t.symbol.as_str()), Some("NORMIE"));

    let mut by_mcap = catalog.tokens().to_vec();
    sort_tokens(&mut by_mcap, SortKey::MarketCap);
    assert_eq!(by_mcap[0].symbol, "ETH");
    assert_eq!(by_mcap[1].symbol, "USDC");
}

#[test]
fn test_equal_keys_keep_prior_order() {
    let catalog = Catalog::builtin();

    // AERO (rank 3) and VIRTUAL (rank 11) share a market cap of 890M;
    // the stable sort must keep AERO first.
    let mut by_mcap = catalog.tokens().to_vec();
    sort_tokens(&mut by_mcap, SortKey::MarketCap);

    let aero = by_mcap.iter().position(|t| t.symbol == "AERO").unwrap();
    let virtual_pos = by_mcap.iter().position(|t| t.symbol == "VIRTUAL").unwrap();
    assert!(aero < virtual_pos);
    assert_eq!(virtual_pos, aero + 1);
}

#[test]
fn test_aggregates_are_independent_of_view_state() {
    let catalog = Catalog::builtin();
    let baseline = calculate_market_stats(catalog.tokens());

    let mut state = ViewState::new();
    state.set_query("ba");
    state.set_sort_key(SortKey::MarketCap);
    let _visible = derive_view(catalog.tokens(), &state);

    assert_eq!(calculate_market_stats(catalog.tokens()), baseline);
}

#[test]
fn test_search_ba_sorted_by_market_cap() {
    // Given: the 12 sample tokens
    let catalog = Catalog::builtin();

    // When: searching "ba" and ordering by market cap
    let mut state = ViewState::new();
    state.set_query("ba");
    state.set_sort_key(SortKey::MarketCap);
    let visible = derive_view(catalog.tokens(), &state);

    // Then: exactly Based ($156M) then Basenji ($45M)
    assert_eq!(symbols(&visible), vec!["BASED", "BENJI"]);
}

#[test]
fn test_no_match_yields_empty_view_and_unchanged_aggregates() {
    let catalog = Catalog::builtin();

    let mut state = ViewState::new();
    state.set_query("zzz_no_match");
    let visible = derive_view(catalog.tokens(), &state);

    assert!(visible.is_empty());

    let stats = calculate_market_stats(catalog.tokens());
    assert_eq!(stats.active_count, 12);
    assert!((stats.total_market_cap - 420_986_000_000.0).abs() < 1.0);
}
