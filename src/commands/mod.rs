pub mod add;
pub mod config;
pub mod join;
pub mod list;
pub mod remind;
pub mod reset;
pub mod rsvp;
pub mod show;
pub mod stats;

use anyhow::Result;
use chrono::Utc;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::demo::demo_state;
use eventdeck_core::notify::HookNotifier;
use eventdeck_core::storage::FileStorage;
use eventdeck_core::{Event, EventStore};
use tracing::debug;

/// Open the store described by the config: file snapshot (demo data on
/// first run), capacity policy, and the bus hook when one is configured.
pub fn open_store(config: &DeckConfig) -> Result<EventStore> {
    let storage = FileStorage::in_dir(&config.data_path());
    debug!(snapshot = %storage.path().display(), policy = ?config.capacity_policy, "Opening event store");
    let mut store = EventStore::open(Box::new(storage), || demo_state(Utc::now()))?
        .with_capacity_policy(config.capacity_policy);

    if let Some(command) = &config.notify_command {
        debug!(hook = %command, "RSVP notifications go through hook");
        store = store.with_notifier(Box::new(HookNotifier::new(command)));
    }

    Ok(store)
}

/// Look up an event, failing with a hint when the id is unknown.
pub fn require_event<'a>(store: &'a EventStore, id: &str) -> Result<&'a Event> {
    store.event(id).ok_or_else(|| {
        anyhow::anyhow!(
            "Event '{}' not found.\n\nList events with:\n  eventdeck list",
            id
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_store_seeds_and_persists_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckConfig {
            data_dir: dir.path().to_path_buf(),
            notify_command: Some("eventdeck-hook-that-does-not-exist".into()),
            ..Default::default()
        };

        let mut store = open_store(&config).unwrap();
        assert_eq!(store.events().len(), 6);
        assert!(require_event(&store, "evt-unknown").is_err());

        // Hook is not installed: the RSVP still goes through and is saved
        store.update_rsvp("evt-5", eventdeck_core::RsvpStatus::Going, true);
        let reopened = open_store(&config).unwrap();
        assert_eq!(reopened.rsvps(), store.rsvps());
    }
}
