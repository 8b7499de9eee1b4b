use anyhow::Result;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::view::RsvpControl;
use owo_colors::OwoColorize;

use super::{open_store, require_event};

pub fn run(config: &DeckConfig, id: &str) -> Result<()> {
    let mut store = open_store(config)?;
    let title = require_event(&store, id)?.title.clone();

    match store.toggle_reminder(id) {
        Some(true) => println!("  🔔 {} {}", RsvpControl::reminder_title(true).yellow(), title),
        Some(false) => println!("  🔕 {}", format!("Recordatorio desactivado: {}", title).dimmed()),
        None => println!(
            "{}",
            format!("  No RSVP for {}. Sign up first with: eventdeck rsvp {}", title, id).dimmed()
        ),
    }

    Ok(())
}
