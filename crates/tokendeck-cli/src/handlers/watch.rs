use crate::presentation::renderers::tui::DashboardTui;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use tokendeck_types::Catalog;

pub fn handle(catalog: Catalog) -> Result<()> {
    if !io::stdout().is_terminal() {
        anyhow::bail!("watch requires an interactive terminal");
    }

    DashboardTui::new(catalog).run()
}
