use chrono::{DateTime, Utc};
use tokendeck_types::{Catalog, ViewState};

pub(crate) struct AppState {
    pub catalog: Catalog,
    pub view: ViewState,
    pub clock: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: ViewState::new(),
            clock: Utc::now(),
        }
    }

    /// Text-change event: append one character to the query.
    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.view.search_query.clone();
        query.push(c);
        self.view.set_query(query);
    }

    /// Text-change event: remove the last character of the query.
    pub fn pop_query_char(&mut self) {
        let mut query = self.view.search_query.clone();
        query.pop();
        self.view.set_query(query);
    }

    pub fn on_tick(&mut self) {
        self.clock = Utc::now();
    }
}
