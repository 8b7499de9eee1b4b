use anyhow::{Context, Result};
use eventdeck_core::config::DeckConfig;
use owo_colors::OwoColorize;

use super::{open_store, require_event};

pub fn run(config: &DeckConfig, id: &str) -> Result<()> {
    let store = open_store(config)?;
    let event = require_event(&store, id)?;

    let Some(virtual_url) = &event.virtual_url else {
        anyhow::bail!("{} has no virtual join link", event.title);
    };

    let parsed = url::Url::parse(virtual_url).with_context(|| format!("Invalid join link: {}", virtual_url))?;

    println!("  {} {}", "Unirse al evento →".cyan(), parsed.as_str().underline());
    open::that(parsed.as_str()).context("Could not open the browser")?;

    Ok(())
}
