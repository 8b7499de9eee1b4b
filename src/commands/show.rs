use anyhow::Result;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::view::Dashboard;

use super::{open_store, require_event};
use crate::render::Render;

pub fn run(config: &DeckConfig, id: &str) -> Result<()> {
    let store = open_store(config)?;
    require_event(&store, id)?;

    let mut dashboard = Dashboard::new();
    dashboard.select(id);

    if let Some(detail) = dashboard.detail(&store) {
        println!("{}", detail.render());
    }

    Ok(())
}
