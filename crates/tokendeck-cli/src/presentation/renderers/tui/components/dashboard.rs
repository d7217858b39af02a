use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokendeck_engine::calculate_market_stats;

use super::Component;
use crate::presentation::formatters::{change, money, time};
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct DashboardComponent;

impl Component for DashboardComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)])
            .split(area);

        render_title_bar(f, chunks[0], state);
        render_stat_cards(f, chunks[1], state);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Tokendeck",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {} tokens", state.catalog.len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let clock = Line::from(Span::styled(
        time::format_clock(state.clock),
        Style::default().fg(Color::Gray),
    ));

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    f.render_widget(Paragraph::new(title), layout[0]);
    f.render_widget(
        Paragraph::new(clock).alignment(Alignment::Right),
        layout[1],
    );
}

fn render_stat_cards(f: &mut Frame, area: Rect, state: &AppState) {
    // Statistics cover the whole catalog, never the filtered view.
    let stats = calculate_market_stats(state.catalog.tokens());

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Total Market Cap",
        money::format_magnitude(stats.total_market_cap),
        Color::Cyan,
    );
    render_card(
        f,
        cards[1],
        "24h Volume",
        money::format_magnitude(stats.total_volume),
        Color::Cyan,
    );

    let avg_color = if stats.avg_change_24h >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };
    render_card(
        f,
        cards[2],
        "Avg 24h Change",
        change::format_signed_percent(stats.avg_change_24h),
        avg_color,
    );
    render_card(
        f,
        cards[3],
        "Active Tokens",
        stats.active_count.to_string(),
        Color::Cyan,
    );
}

fn render_card(f: &mut Frame, area: Rect, label: &str, value: String, value_color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::Gray),
        ));

    let value_line = Line::from(Span::styled(
        value,
        Style::default()
            .fg(value_color)
            .add_modifier(Modifier::BOLD),
    ));

    f.render_widget(
        Paragraph::new(value_line)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
