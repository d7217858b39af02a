use serde::Serialize;
use std::fmt;

use owo_colors::OwoColorize;
use tokendeck_types::{SortKey, TokenRecord};

use crate::presentation::formatters::change::{format_change, Direction};
use crate::presentation::formatters::money::{format_magnitude, format_price};
use crate::presentation::formatters::text;

#[derive(Debug, Serialize)]
pub struct TokenListViewModel {
    pub tokens: Vec<TokenEntryViewModel>,
    pub matched_count: usize,
    pub total_count: usize,
    pub applied_filters: FilterSummary,
}

#[derive(Debug, Serialize)]
pub struct TokenEntryViewModel {
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub logo: String,
    pub color: String,
}

impl From<&TokenRecord> for TokenEntryViewModel {
    fn from(token: &TokenRecord) -> Self {
        Self {
            rank: token.rank,
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            price: token.price,
            change_24h: token.change_24h,
            market_cap: token.market_cap,
            volume_24h: token.volume_24h,
            logo: token.logo.clone(),
            color: token.color.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterSummary {
    pub query: Option<String>,
    pub sort_key: SortKey,
}

impl fmt::Display for TokenListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tokens.is_empty() {
            let query = self.applied_filters.query.as_deref().unwrap_or("");
            writeln!(f, "No tokens found matching \"{}\".", query)?;
            return Ok(());
        }

        let header = format!(
            "{:>4}  {:<26} {:>12} {:>10} {:>10} {:>10}",
            "#", "TOKEN", "PRICE", "24H", "MCAP", "VOLUME"
        );
        writeln!(f, "{}", header.bright_black())?;

        for token in &self.tokens {
            writeln!(f, "{}", format_row(token))?;
        }

        if self.applied_filters.query.is_some() || self.applied_filters.sort_key != SortKey::Rank {
            writeln!(f)?;
            writeln!(f, "Filters applied:")?;
            if let Some(ref query) = self.applied_filters.query {
                writeln!(f, "  Query: {}", query)?;
            }
            if self.applied_filters.sort_key != SortKey::Rank {
                writeln!(f, "  Sort: {}", text::sort_key_label(self.applied_filters.sort_key))?;
            }
        }

        Ok(())
    }
}

fn format_row(token: &TokenEntryViewModel) -> String {
    let rank = format!("#{}", token.rank);
    let name = text::truncate(&format!("{} ({})", token.name, token.symbol), 26);

    let (direction, magnitude) = format_change(token.change_24h);
    let change_cell = format!("{:>10}", format!("{} {}%", direction.arrow(), magnitude));
    let change_cell = match direction {
        Direction::Up => change_cell.green().to_string(),
        Direction::Down => change_cell.red().to_string(),
    };

    format!(
        "{}  {:<26} {:>12} {} {:>10} {:>10}",
        format!("{:>4}", rank).bright_black(),
        name,
        format_price(token.price),
        change_cell,
        format_magnitude(token.market_cap),
        format_magnitude(token.volume_24h),
    )
}

#[derive(Debug, Serialize)]
pub struct TokenDetailViewModel {
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub logo: String,
    pub color: String,
}

impl From<&TokenRecord> for TokenDetailViewModel {
    fn from(token: &TokenRecord) -> Self {
        Self {
            rank: token.rank,
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            price: token.price,
            change_24h: token.change_24h,
            market_cap: token.market_cap,
            volume_24h: token.volume_24h,
            logo: token.logo.clone(),
            color: token.color.clone(),
        }
    }
}

impl fmt::Display for TokenDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} ({})",
            self.logo,
            self.name.bold(),
            self.symbol
        )?;

        let (direction, magnitude) = format_change(self.change_24h);
        let change = format!("{} {}%", direction.arrow(), magnitude);
        let change = match direction {
            Direction::Up => change.green().to_string(),
            Direction::Down => change.red().to_string(),
        };

        writeln!(f, "  Rank:        #{}", self.rank)?;
        writeln!(f, "  Price:       {}", format_price(self.price))?;
        writeln!(f, "  24h Change:  {}", change)?;
        writeln!(f, "  Market Cap:  {}", format_magnitude(self.market_cap))?;
        writeln!(f, "  24h Volume:  {}", format_magnitude(self.volume_24h))?;

        Ok(())
    }
}
