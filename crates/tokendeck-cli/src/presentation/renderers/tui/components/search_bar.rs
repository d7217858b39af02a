use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::formatters::text;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct SearchBarComponent;

impl Component for SearchBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(" Search ", Style::default().fg(Color::Gray)));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        let query = if state.view.search_query.is_empty() {
            Line::from(Span::styled(
                "Search tokens...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled(
                    state.view.search_query.clone(),
                    Style::default().fg(Color::White),
                ),
                Span::styled("▏", Style::default().fg(Color::Cyan)),
            ])
        };

        let sort = Line::from(Span::styled(
            format!("Sort: {}", text::sort_key_label(state.view.sort_key)),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

        f.render_widget(Paragraph::new(query), chunks[0]);
        f.render_widget(Paragraph::new(sort).alignment(Alignment::Right), chunks[1]);
    }
}
