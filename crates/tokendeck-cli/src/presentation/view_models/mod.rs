pub mod common;
pub mod result;
pub mod stats;
pub mod token;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use result::CommandResultViewModel;
pub use stats::MarketStatsViewModel;
pub use token::{FilterSummary, TokenDetailViewModel, TokenEntryViewModel, TokenListViewModel};
