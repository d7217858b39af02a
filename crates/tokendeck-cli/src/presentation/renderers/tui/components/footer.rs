use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, _state: &mut AppState) {
        let hints = Line::from(vec![
            Span::styled("type", Style::default().fg(Color::Cyan)),
            Span::raw(" search  "),
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" sort  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" clear/quit  "),
            Span::styled("Ctrl-C", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);

        let footer = Paragraph::new(hints).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer, area);
    }
}
