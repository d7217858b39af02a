/// Sign classification of a 24h change. Zero counts as `Up`
/// (non-negative boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }
}

/// Split a signed change into its direction and two-decimal magnitude.
pub fn format_change(change: f64) -> (Direction, String) {
    let direction = if change >= 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    (direction, format!("{:.2}", change.abs()))
}

/// Format a percentage with an explicit sign, as shown on stat cards.
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}
