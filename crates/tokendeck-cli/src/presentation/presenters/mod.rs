mod token;

pub use token::{present_market_stats, present_token_detail, present_token_list};
