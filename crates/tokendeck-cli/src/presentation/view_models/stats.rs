use serde::Serialize;
use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::change::format_signed_percent;
use crate::presentation::formatters::money::format_magnitude;

/// Aggregate statistics over the full catalog, independent of any
/// active search or sort.
#[derive(Debug, Serialize)]
pub struct MarketStatsViewModel {
    pub total_market_cap: f64,
    pub total_volume: f64,
    pub avg_change_24h: f64,
    pub active_count: usize,
}

impl fmt::Display for MarketStatsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg = format_signed_percent(self.avg_change_24h);
        let avg = if self.avg_change_24h >= 0.0 {
            avg.green().to_string()
        } else {
            avg.red().to_string()
        };

        writeln!(
            f,
            "{:<18} {}",
            "Total Market Cap",
            format_magnitude(self.total_market_cap).bold()
        )?;
        writeln!(
            f,
            "{:<18} {}",
            "24h Volume",
            format_magnitude(self.total_volume).bold()
        )?;
        writeln!(f, "{:<18} {}", "Avg 24h Change", avg)?;
        writeln!(f, "{:<18} {}", "Active Tokens", self.active_count.bold())?;

        Ok(())
    }
}
