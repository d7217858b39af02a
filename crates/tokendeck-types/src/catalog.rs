use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::token::TokenRecord;

/// The fixed, ordered collection of token records for a session.
///
/// Built once at process start and never mutated afterwards. Derived
/// views (filtering, ordering, statistics) are computed fresh from the
/// records plus the current view state; there is no cached derived
/// state to invalidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    tokens: Vec<TokenRecord>,
}

#[rustfmt::skip]
static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    tokens: vec![
        record(1, "Ethereum", "ETH", 3245.67, 2.34, 389_000_000_000.0, 12_500_000_000.0, "⟠", "#627EEA"),
        record(2, "USD Coin", "USDC", 1.00, 0.01, 28_000_000_000.0, 5_600_000_000.0, "◉", "#2775CA"),
        record(3, "Aerodrome", "AERO", 1.23, 8.45, 890_000_000.0, 78_000_000.0, "✈", "#0052FF"),
        record(4, "Brett", "BRETT", 0.1234, -3.21, 1_200_000_000.0, 89_000_000.0, "🐸", "#4ADE80"),
        record(5, "Degen", "DEGEN", 0.0089, 15.67, 340_000_000.0, 45_000_000.0, "🎩", "#A855F7"),
        record(6, "Toshi", "TOSHI", 0.00045, -5.43, 180_000_000.0, 23_000_000.0, "🐱", "#F97316"),
        record(7, "Based", "BASED", 0.0234, 4.56, 156_000_000.0, 18_000_000.0, "🔵", "#0052FF"),
        record(8, "Mochi", "MOCHI", 0.0067, -1.23, 120_000_000.0, 15_000_000.0, "🍡", "#EC4899"),
        record(9, "Higher", "HIGHER", 0.0456, 12.34, 98_000_000.0, 12_000_000.0, "⬆", "#22D3EE"),
        record(10, "Normie", "NORMIE", 0.0023, -8.76, 67_000_000.0, 8_900_000.0, "😐", "#A3A3A3"),
        record(11, "Virtual", "VIRTUAL", 2.89, 6.78, 890_000_000.0, 67_000_000.0, "◈", "#8B5CF6"),
        record(12, "Basenji", "BENJI", 0.00012, 23.45, 45_000_000.0, 5_600_000.0, "🐕", "#EAB308"),
    ],
});

#[allow(clippy::too_many_arguments)]
fn record(
    rank: u32,
    name: &str,
    symbol: &str,
    price: f64,
    change_24h: f64,
    market_cap: f64,
    volume_24h: f64,
    logo: &str,
    color: &str,
) -> TokenRecord {
    TokenRecord {
        rank,
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change_24h,
        market_cap,
        volume_24h,
        logo: logo.to_string(),
        color: color.to_string(),
    }
}

impl Catalog {
    /// Build a catalog, validating the record invariants: positive
    /// unique ranks, unique symbols (case-insensitive), and
    /// non-negative price, market cap, and volume.
    pub fn new(tokens: Vec<TokenRecord>) -> Result<Self> {
        let mut ranks = HashSet::new();
        let mut symbols = HashSet::new();

        for token in &tokens {
            if token.rank == 0 {
                return Err(Error::Invalid(format!("token {} has rank 0", token.symbol)));
            }
            if !ranks.insert(token.rank) {
                return Err(Error::Invalid(format!("duplicate rank {}", token.rank)));
            }
            if !symbols.insert(token.symbol.to_lowercase()) {
                return Err(Error::Invalid(format!("duplicate symbol {}", token.symbol)));
            }
            if token.price < 0.0 || token.market_cap < 0.0 || token.volume_24h < 0.0 {
                return Err(Error::Invalid(format!(
                    "token {} has a negative money field",
                    token.symbol
                )));
            }
        }

        Ok(Self { tokens })
    }

    /// The embedded default catalog.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load a catalog from a JSON array of token records.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let tokens: Vec<TokenRecord> = serde_json::from_str(&content)?;
        Self::new(tokens)
    }

    pub fn tokens(&self) -> &[TokenRecord] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Case-insensitive lookup by the symbol identity key.
    pub fn find_symbol(&self, symbol: &str) -> Option<&TokenRecord> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }
}
