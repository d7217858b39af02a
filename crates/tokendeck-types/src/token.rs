use serde::{Deserialize, Serialize};

/// Single entry in the token catalog.
///
/// Records are immutable once the catalog is built; every derived view
/// is recomputed from them plus the current [`ViewState`](crate::ViewState).
/// The serde names follow upstream market-data JSON conventions
/// (`change24h`, `marketCap`, `volume24h`), which is the on-disk
/// catalog file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Market-cap rank. Positive and unique across the catalog; the
    /// default sort key and a display label.
    pub rank: u32,
    /// Display name.
    pub name: String,
    /// Ticker symbol. The stable identity key for rendering; unique
    /// across the catalog (case-insensitive).
    pub symbol: String,
    /// Spot price in currency units. Non-negative.
    pub price: f64,
    /// 24-hour change, signed percentage.
    pub change_24h: f64,
    /// Market capitalization in currency units. Non-negative.
    pub market_cap: f64,
    /// 24-hour traded volume in currency units. Non-negative.
    pub volume_24h: f64,
    /// Presentation-only glyph shown next to the name.
    pub logo: String,
    /// Presentation-only accent color (hex).
    pub color: String,
}
