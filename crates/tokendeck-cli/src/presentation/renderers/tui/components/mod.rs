use ratatui::{layout::Rect, Frame};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod dashboard;
pub(crate) mod footer;
pub(crate) mod search_bar;
pub(crate) mod token_list;

pub(crate) use dashboard::DashboardComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use search_bar::SearchBarComponent;
pub(crate) use token_list::TokenListComponent;
