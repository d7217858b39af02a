mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokendeck_types::Catalog;

use app::AppState;

/// Interactive dashboard: live search, sort cycling, and a
/// once-a-second clock. The visible list is re-derived from
/// (catalog, view state) on every draw.
pub struct DashboardTui {
    catalog: Catalog,
}

impl DashboardTui {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn run(self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut app_state = AppState::new(self.catalog);
        let mut should_quit = false;

        // The header clock ticks once per second.
        let tick_rate = Duration::from_secs(1);
        let mut last_tick = std::time::Instant::now();

        while !should_quit {
            terminal.draw(|f| {
                ui::draw(f, &mut app_state);
            })?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        should_quit = true;
                    } else {
                        match key.code {
                            KeyCode::Esc => {
                                // First Esc clears the search, second quits
                                if app_state.view.search_query.is_empty() {
                                    should_quit = true;
                                } else {
                                    app_state.view.set_query("");
                                }
                            }
                            KeyCode::Tab => {
                                let next = app_state.view.sort_key.next();
                                app_state.view.set_sort_key(next);
                            }
                            KeyCode::Backspace => {
                                app_state.pop_query_char();
                            }
                            KeyCode::Char(c) => {
                                app_state.push_query_char(c);
                            }
                            _ => {}
                        }
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app_state.on_tick();
                last_tick = std::time::Instant::now();
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}
