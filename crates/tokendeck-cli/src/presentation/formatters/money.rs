/// Scale a currency amount by powers of 1000 with T/B/M/K suffixes.
///
/// Thresholds are evaluated largest first; below 1e3 falls back to
/// two-decimal fixed notation. Total over all reals.
pub fn format_magnitude(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        format!("${:.2}", value)
    }
}

/// Format a price with tiered decimal precision: grouped thousands
/// above 1000, then 2, 4, and 6 decimals as the price gets smaller.
pub fn format_price(price: f64) -> String {
    if price >= 1000.0 {
        format!("${}", group_thousands(price))
    } else if price >= 1.0 {
        format!("${:.2}", price)
    } else if price >= 0.01 {
        format!("${:.4}", price)
    } else {
        format!("${:.6}", price)
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}.{}", grouped, frac_part)
}
