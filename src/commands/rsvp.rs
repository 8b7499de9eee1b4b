use anyhow::Result;
use dialoguer::Select;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::view::{RsvpControl, RsvpMenu};
use eventdeck_core::{EventStore, RsvpOutcome, RsvpStatus};
use owo_colors::OwoColorize;

use super::{open_store, require_event};
use crate::render::render_rsvp_control;

pub fn run(config: &DeckConfig, id: &str, status: Option<RsvpStatus>, reminder: Option<bool>) -> Result<()> {
    let mut store = open_store(config)?;
    let event = require_event(&store, id)?;
    let title = event.title.clone();

    let mut menu = RsvpMenu::default();
    menu.toggle();

    let outcome = match (status, reminder) {
        (Some(status), Some(reminder)) => store.update_rsvp(id, status, reminder),
        (Some(status), None) => menu.choose(&mut store, id, status),
        (None, _) => {
            let control = RsvpControl::build(event, store.user_rsvp(id), &menu);
            let Some(status) = pick_status(&control, id, config.interactive)? else {
                return Ok(());
            };
            match reminder {
                Some(reminder) => store.update_rsvp(id, status, reminder),
                None => menu.choose(&mut store, id, status),
            }
        }
    };

    report(&store, id, &title, outcome)
}

pub fn cancel(config: &DeckConfig, id: &str) -> Result<()> {
    let mut store = open_store(config)?;
    let title = require_event(&store, id)?.title.clone();

    if !store.user_rsvp(id).is_some_and(|r| r.status.is_going()) {
        println!("{}", format!("  You are not registered for {}", title).dimmed());
        return Ok(());
    }

    let outcome = RsvpMenu::default().cancel(&mut store, id);
    report(&store, id, &title, outcome)
}

/// Ask for a status using the options of an open RSVP menu.
/// `None` when there is nothing to choose (already going).
fn pick_status(control: &RsvpControl, id: &str, interactive: bool) -> Result<Option<RsvpStatus>> {
    match control {
        RsvpControl::Confirmed { .. } => {
            println!("  {}", render_rsvp_control(control, id));
            Ok(None)
        }
        RsvpControl::Picker { full: true, .. } => {
            anyhow::bail!("🚫 Evento lleno: this event has no seats left")
        }
        RsvpControl::Picker { options, .. } => {
            if !interactive {
                anyhow::bail!("No RSVP status given. Use: eventdeck rsvp <id> [going|interested|not-going]");
            }

            let items: Vec<String> = options.iter().map(|o| format!("{} {}", o.emoji, o.label)).collect();
            let selection = Select::new()
                .with_prompt("  RSVP")
                .items(&items)
                .default(0)
                .interact()?;
            Ok(Some(options[selection].status))
        }
    }
}

fn report(store: &EventStore, id: &str, title: &str, outcome: RsvpOutcome) -> Result<()> {
    match outcome {
        RsvpOutcome::Updated { status, attendees, .. } => {
            let label = status.info().map(|i| format!("{} {}", i.emoji, i.label)).unwrap_or_default();
            println!("  {} {}", label.green(), title);

            if let Some(count) = attendees {
                println!("  {}", format!("{} asistentes", count).dimmed());
            }
            if let Some(rsvp) = store.user_rsvp(id).filter(|r| r.status.is_going()) {
                println!("  {}", RsvpControl::reminder_title(rsvp.reminder).dimmed());
            }
            Ok(())
        }
        RsvpOutcome::EventFull { .. } => {
            anyhow::bail!("🚫 Evento lleno: {} has no seats left", title)
        }
    }
}
