use tokendeck_types::TokenRecord;

/// Aggregate statistics over the full catalog.
///
/// Independent of the view state: filtering and sorting never change
/// these values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketStats {
    pub total_market_cap: f64,
    pub total_volume: f64,
    pub avg_change_24h: f64,
    pub active_count: usize,
}

pub fn calculate_market_stats(catalog: &[TokenRecord]) -> MarketStats {
    let total_market_cap = catalog.iter().map(|t| t.market_cap).sum();
    let total_volume = catalog.iter().map(|t| t.volume_24h).sum();
    // An empty catalog reports 0.00%, never NaN.
    let avg_change_24h = if catalog.is_empty() {
        0.0
    } else {
        catalog.iter().map(|t| t.change_24h).sum::<f64>() / catalog.len() as f64
    };

    MarketStats {
        total_market_cap,
        total_volume,
        avg_change_24h,
        active_count: catalog.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokendeck_types::Catalog;

    #[test]
    fn test_empty_catalog_reports_zero_average() {
        let stats = calculate_market_stats(&[]);
        assert_eq!(stats.avg_change_24h, 0.0);
        assert_eq!(stats.total_market_cap, 0.0);
        assert_eq!(stats.active_count, 0);
    }

    #[test]
    fn test_builtin_catalog_totals() {
        let catalog = Catalog::builtin();
        let stats = calculate_market_stats(catalog.tokens());

        assert_eq!(stats.active_count, 12);
        assert!((stats.total_market_cap - 420_986_000_000.0).abs() < 1.0);
        assert!((stats.total_volume - 18_461_500_000.0).abs() < 1.0);
        assert!((stats.avg_change_24h - 4.5808).abs() < 0.001);
    }
}
