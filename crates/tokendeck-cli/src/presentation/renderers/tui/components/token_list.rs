use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use tokendeck_engine::derive_view;

use super::Component;
use crate::presentation::formatters::change::{format_change, Direction};
use crate::presentation::formatters::money;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct TokenListComponent;

impl Component for TokenListComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        // Re-derived from (catalog, view state) on every draw; there is
        // no cached view to invalidate.
        let visible = derive_view(state.catalog.tokens(), &state.view);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(" Tokens ", Style::default().fg(Color::Gray)));

        if visible.is_empty() {
            let message = Paragraph::new(Line::from(Span::styled(
                format!(
                    "No tokens found matching \"{}\"",
                    state.view.search_query
                ),
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .alignment(Alignment::Center);
            f.render_widget(message, area);
            return;
        }

        let rows: Vec<Row> = visible
            .iter()
            .map(|token| {
                let (direction, magnitude) = format_change(token.change_24h);
                let change_style = match direction {
                    Direction::Up => Style::default().fg(Color::Green),
                    Direction::Down => Style::default().fg(Color::Red),
                };

                Row::new(vec![
                    Cell::from(format!("#{}", token.rank))
                        .style(Style::default().fg(Color::DarkGray)),
                    Cell::from(format!("{} {}", token.logo, token.name)),
                    Cell::from(token.symbol.clone()).style(Style::default().fg(Color::Gray)),
                    Cell::from(money::format_price(token.price)),
                    Cell::from(format!("{} {}%", direction.arrow(), magnitude))
                        .style(change_style),
                    Cell::from(money::format_magnitude(token.market_cap)),
                    Cell::from(money::format_magnitude(token.volume_24h)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(16),
                Constraint::Length(8),
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec!["#", "TOKEN", "SYMBOL", "PRICE", "24H", "MCAP", "VOLUME"]).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(block);

        f.render_widget(table, area);
    }
}
