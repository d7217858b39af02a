use serde::{Deserialize, Serialize};

/// Field driving the display order of the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by catalog rank.
    #[default]
    Rank,
    /// Descending by price.
    Price,
    /// Descending by 24h change (most positive first).
    Change,
    /// Descending by market cap.
    MarketCap,
}

impl SortKey {
    /// Next key in the cycle used by the dashboard's sort toggle.
    pub fn next(self) -> Self {
        match self {
            Self::Rank => Self::Price,
            Self::Price => Self::Change,
            Self::Change => Self::MarketCap,
            Self::MarketCap => Self::Rank,
        }
    }
}

/// Session-local search and sort selection.
///
/// Created with defaults at session start, mutated only by the two
/// user input events, and discarded with the session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_query: String,
    pub sort_key: SortKey,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text-change event: replaces the query verbatim (no trimming).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Sort-selection event.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }
}
