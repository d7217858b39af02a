use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::app::AppState;
use super::components::{
    Component, DashboardComponent, FooterComponent, SearchBarComponent, TokenListComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title bar + stat cards
            Constraint::Length(3), // Search & sort bar
            Constraint::Min(0),    // Token list
            Constraint::Length(2), // Key hints
        ])
        .split(f.area());

    DashboardComponent.render(f, main_chunks[0], state);
    SearchBarComponent.render(f, main_chunks[1], state);
    TokenListComponent.render(f, main_chunks[2], state);
    FooterComponent.render(f, main_chunks[3], state);
}
