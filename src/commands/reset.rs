use anyhow::Result;
use chrono::Utc;
use dialoguer::Confirm;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::demo::demo_state;
use owo_colors::OwoColorize;

use super::open_store;

pub fn run(config: &DeckConfig, yes: bool) -> Result<()> {
    if !yes {
        if !config.interactive {
            anyhow::bail!("Refusing to reset without confirmation. Use --yes");
        }
        let confirmed = Confirm::new()
            .with_prompt("  Replace all events and RSVPs with the demo data?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    let mut store = open_store(config)?;
    store.reset(demo_state(Utc::now()));

    println!("{}", format!("  Restored {} demo events", store.events().len()).green());
    Ok(())
}
