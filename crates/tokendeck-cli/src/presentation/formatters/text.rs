use tokendeck_types::SortKey;

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        // For very small max_len, just take first chars without "..."
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Short label shown in sort selectors.
pub fn sort_key_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Rank => "Rank",
        SortKey::Price => "Price",
        SortKey::Change => "Change",
        SortKey::MarketCap => "MCap",
    }
}
