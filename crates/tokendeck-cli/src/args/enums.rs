use clap::ValueEnum;
use tokendeck_types::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Rank,
    Price,
    Change,
    Mcap,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Rank => SortKey::Rank,
            SortField::Price => SortKey::Price,
            SortField::Change => SortKey::Change,
            SortField::Mcap => SortKey::MarketCap,
        }
    }
}
