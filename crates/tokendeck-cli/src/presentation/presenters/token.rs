use crate::presentation::view_models::{
    CommandResultViewModel, FilterSummary, Guidance, MarketStatsViewModel, StatusBadge,
    TokenDetailViewModel, TokenEntryViewModel, TokenListViewModel,
};
use tokendeck_engine::MarketStats;
use tokendeck_types::{TokenRecord, ViewState};

pub fn present_token_list(
    visible: Vec<TokenRecord>,
    matched_count: usize,
    total_count: usize,
    state: &ViewState,
) -> CommandResultViewModel<TokenListViewModel> {
    let tokens: Vec<TokenEntryViewModel> =
        visible.iter().map(TokenEntryViewModel::from).collect();

    let view = TokenListViewModel {
        tokens,
        matched_count,
        total_count,
        applied_filters: FilterSummary {
            query: if state.search_query.is_empty() {
                None
            } else {
                Some(state.search_query.clone())
            },
            sort_key: state.sort_key,
        },
    };

    add_token_list_guidance(CommandResultViewModel::new(view))
}

fn add_token_list_guidance(
    mut result: CommandResultViewModel<TokenListViewModel>,
) -> CommandResultViewModel<TokenListViewModel> {
    let matched = result.content.matched_count;
    let shown = result.content.tokens.len();

    if matched == 0 {
        result = result
            .with_badge(StatusBadge::info("No matching tokens"))
            .with_suggestion(
                Guidance::new("Clear the search to see the full catalog")
                    .with_command("tokendeck list"),
            );
    } else {
        let label = if matched == 1 {
            "1 token".to_string()
        } else {
            format!("{} tokens", matched)
        };
        result = result.with_badge(StatusBadge::success(label));

        if shown < matched {
            result = result.with_suggestion(
                Guidance::new(format!("Showing {} of {} matches", shown, matched))
                    .with_command(format!("tokendeck list --limit {}", matched)),
            );
        }
    }

    result
}

pub fn present_market_stats(stats: &MarketStats) -> CommandResultViewModel<MarketStatsViewModel> {
    CommandResultViewModel::new(MarketStatsViewModel {
        total_market_cap: stats.total_market_cap,
        total_volume: stats.total_volume,
        avg_change_24h: stats.avg_change_24h,
        active_count: stats.active_count,
    })
}

pub fn present_token_detail(token: &TokenRecord) -> CommandResultViewModel<TokenDetailViewModel> {
    CommandResultViewModel::new(TokenDetailViewModel::from(token))
}
